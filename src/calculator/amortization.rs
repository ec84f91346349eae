//! Monthly rate and annuity present-value factor

use crate::input::Input;

/// Below this the monthly rate is treated as zero
const ZERO_RATE_TOLERANCE: f64 = 1e-10;

/// Convert an annual percentage rate (5.0 = 5%) to a monthly decimal rate
pub fn monthly_rate(input: &Input) -> f64 {
    (input.interest_rate / 100.0) / 12.0
}

/// Present value of 1 paid at the end of each of `n_months` periods.
///
/// At a zero rate the factor is its limit, `n_months`, instead of 0/0.
pub fn annuity_factor(monthly_rate: f64, n_months: u32) -> f64 {
    if monthly_rate.abs() < ZERO_RATE_TOLERANCE {
        log::debug!("Zero monthly rate, using straight-line factor of {}", n_months);
        return n_months as f64;
    }

    (1.0 - (1.0 + monthly_rate).powf(-f64::from(n_months))) / monthly_rate
}

/// Largest loan a level monthly `cash_flow` can repay over `n_months`
pub fn loan_amount(cash_flow: f64, monthly_rate: f64, n_months: u32) -> f64 {
    cash_flow * annuity_factor(monthly_rate, n_months)
}
