//! Calculator output

use crate::input::Input;
use serde::{Deserialize, Serialize};

/// Outcome of one affordability calculation.
///
/// `delta` is always `input.ask_price - loan_amount`; a positive delta is the
/// shortfall between the asking price and the largest affordable loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityResult {
    pub input: Input,
    pub effective_cash_flow: f64,
    pub loan_amount: f64,
    pub delta: f64,
}

impl AffordabilityResult {
    /// True when the affordable loan covers the asking price
    pub fn is_affordable(&self) -> bool {
        self.delta <= 0.0
    }

    /// False when a finite input overflowed somewhere in the calculation
    pub fn is_finite(&self) -> bool {
        self.effective_cash_flow.is_finite() && self.loan_amount.is_finite() && self.delta.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_finite() {
        let mut result = AffordabilityResult {
            input: Input::new(1.0, 2.0, 0.0, 5.0),
            effective_cash_flow: 1.0,
            loan_amount: 100.0,
            delta: -99.0,
        };
        assert!(result.is_finite());

        result.loan_amount = f64::INFINITY;
        assert!(!result.is_finite());
    }
}
