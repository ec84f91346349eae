//! Effective monthly cash flow

use crate::assumptions::Assumptions;
use crate::input::Input;

/// Expense actually charged against income: the larger of the stated
/// expense and the standard share of income
pub fn expense_used(input: &Input, assumptions: &Assumptions) -> f64 {
    let baseline = input.income * assumptions.standard_expense_ratio;
    if input.expense > baseline {
        input.expense
    } else {
        baseline
    }
}

/// Disposable income after expenses, scaled down by the cash-flow weight.
///
/// Negative when the expense exceeds income; that value is passed on as-is.
pub fn effective_cash_flow(input: &Input, assumptions: &Assumptions) -> f64 {
    (input.income - expense_used(input, assumptions)) / assumptions.cash_flow_weight
}
