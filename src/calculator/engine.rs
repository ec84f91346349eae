//! Affordability calculator: composes cash flow, amortization and delta

use super::amortization;
use super::cashflow;
use super::result::AffordabilityResult;
use crate::assumptions::Assumptions;
use crate::input::Input;

/// Calculator bound to a set of assumptions
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AffordabilityCalculator {
    assumptions: Assumptions,
}

impl AffordabilityCalculator {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn effective_cash_flow(&self, input: &Input) -> f64 {
        cashflow::effective_cash_flow(input, &self.assumptions)
    }

    pub fn monthly_rate(&self, input: &Input) -> f64 {
        amortization::monthly_rate(input)
    }

    /// Loan a given monthly cash flow supports at the input's rate over the term
    pub fn loan_amount(&self, input: &Input, cash_flow: f64) -> f64 {
        amortization::loan_amount(
            cash_flow,
            self.monthly_rate(input),
            self.assumptions.term_months,
        )
    }

    pub fn compute(&self, input: &Input) -> AffordabilityResult {
        let effective_cash_flow = self.effective_cash_flow(input);
        let loan_amount = self.loan_amount(input, effective_cash_flow);

        AffordabilityResult {
            input: *input,
            effective_cash_flow,
            loan_amount,
            delta: input.ask_price - loan_amount,
        }
    }
}

const STANDARD: AffordabilityCalculator = AffordabilityCalculator {
    assumptions: Assumptions::standard(),
};

/// Effective cash flow under the standard assumptions
pub fn effective_cash_flow(input: &Input) -> f64 {
    STANDARD.effective_cash_flow(input)
}

/// Monthly decimal rate from the input's annual percentage
pub fn monthly_rate(input: &Input) -> f64 {
    STANDARD.monthly_rate(input)
}

/// Loan amount over the standard 360-month term
pub fn loan_amount(input: &Input, cash_flow: f64) -> f64 {
    STANDARD.loan_amount(input, cash_flow)
}

/// Full result under the standard assumptions
pub fn compute_result(input: &Input) -> AffordabilityResult {
    STANDARD.compute(input)
}
