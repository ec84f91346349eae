//! Affordability calculator: effective cash flow, loan amount and delta

mod amortization;
mod cashflow;
mod engine;
mod result;

pub use amortization::annuity_factor;
pub use cashflow::expense_used;
pub use engine::{
    compute_result, effective_cash_flow, loan_amount, monthly_rate, AffordabilityCalculator,
};
pub use result::AffordabilityResult;
