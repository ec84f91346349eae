//! Environment overrides for the assumptions
//!
//! Reads:
//!   AFFORDABILITY_EXPENSE_RATIO, AFFORDABILITY_CASH_FLOW_WEIGHT, AFFORDABILITY_TERM_MONTHS
//! Unset variables keep the current value.

use super::Assumptions;
use crate::error::{AffordabilityError, Result};
use std::str::FromStr;

pub const EXPENSE_RATIO_VAR: &str = "AFFORDABILITY_EXPENSE_RATIO";
pub const CASH_FLOW_WEIGHT_VAR: &str = "AFFORDABILITY_CASH_FLOW_WEIGHT";
pub const TERM_MONTHS_VAR: &str = "AFFORDABILITY_TERM_MONTHS";

/// Apply overrides found through `lookup` on top of `base`, then validate.
///
/// `lookup` is `std::env::var` in production; tests pass a map.
pub fn apply_overrides<F>(base: Assumptions, lookup: F) -> Result<Assumptions>
where
    F: Fn(&str) -> Option<String>,
{
    let mut assumptions = base;

    if let Some(ratio) = read_var::<_, f64>(&lookup, EXPENSE_RATIO_VAR)? {
        assumptions.standard_expense_ratio = ratio;
    }
    if let Some(weight) = read_var::<_, f64>(&lookup, CASH_FLOW_WEIGHT_VAR)? {
        assumptions.cash_flow_weight = weight;
    }
    if let Some(months) = read_var::<_, u32>(&lookup, TERM_MONTHS_VAR)? {
        assumptions.term_months = months;
    }

    let assumptions = assumptions.validate()?;
    log::debug!("Assumptions in effect: {:?}", assumptions);
    Ok(assumptions)
}

fn read_var<F, T>(lookup: &F, name: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|e| AffordabilityError::Config {
            message: format!("{} = {:?}: {}", name, raw, e),
        }),
    }
}
