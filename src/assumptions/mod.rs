//! Calculator assumptions: expense ratio, cash-flow weight and loan term

pub mod env;

use crate::error::{AffordabilityError, Result};
use serde::{Deserialize, Serialize};

/// Share of income assumed to go to expenses when the stated expense is lower
pub const STANDARD_EXPENSE_RATIO: f64 = 0.35;

/// Divisor applied to disposable income to get the effective cash flow
pub const CASH_FLOW_WEIGHT: f64 = 1.2;

/// Fixed amortization schedule: 30 years of monthly payments
pub const THIRTY_YEARS_MONTHS: u32 = 360;

/// Longest term accepted from configuration: 100 years
pub const MAX_TERM_MONTHS: u32 = 1200;

/// Container for the constants the calculator runs with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assumptions {
    /// Expense baseline as a fraction of income (0.35 = 35%)
    pub standard_expense_ratio: f64,

    /// Weighting divisor for disposable income
    pub cash_flow_weight: f64,

    /// Number of monthly periods the loan is amortized over
    pub term_months: u32,
}

impl Assumptions {
    /// The standard assumptions: 35% expense ratio, 1.2 weight, 360 months
    pub const fn standard() -> Self {
        Self {
            standard_expense_ratio: STANDARD_EXPENSE_RATIO,
            cash_flow_weight: CASH_FLOW_WEIGHT,
            term_months: THIRTY_YEARS_MONTHS,
        }
    }

    /// Standard assumptions with environment overrides applied
    pub fn from_env() -> Result<Self> {
        env::apply_overrides(Self::standard(), |key| std::env::var(key).ok())
    }

    /// Check the assumptions keep the calculator finite
    pub fn validate(self) -> Result<Self> {
        if !self.standard_expense_ratio.is_finite() || self.standard_expense_ratio < 0.0 {
            return Err(AffordabilityError::Config {
                message: format!(
                    "standard expense ratio must be a non-negative number, got {}",
                    self.standard_expense_ratio
                ),
            });
        }
        if !self.cash_flow_weight.is_finite() || self.cash_flow_weight <= 0.0 {
            return Err(AffordabilityError::Config {
                message: format!(
                    "cash flow weight must be a positive number, got {}",
                    self.cash_flow_weight
                ),
            });
        }
        if self.term_months == 0 || self.term_months > MAX_TERM_MONTHS {
            return Err(AffordabilityError::Config {
                message: format!(
                    "term must be between 1 and {} months, got {}",
                    MAX_TERM_MONTHS, self.term_months
                ),
            });
        }
        Ok(self)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::standard()
    }
}
