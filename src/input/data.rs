//! Request input data structures

use serde::{Deserialize, Serialize};

pub const ASK_PRICE_KEY: &str = "ask_price";
pub const INCOME_KEY: &str = "income";
pub const EXPENSE_KEY: &str = "expense";
pub const INTEREST_RATE_KEY: &str = "interest_rate";

/// The four numbers one affordability question is asked with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Asking price of the property
    pub ask_price: f64,

    /// Monthly income
    pub income: f64,

    /// Stated monthly expense
    pub expense: f64,

    /// Annual interest rate as a percentage (5.0 = 5%)
    pub interest_rate: f64,
}

impl Input {
    pub fn new(ask_price: f64, income: f64, expense: f64, interest_rate: f64) -> Self {
        Self {
            ask_price,
            income,
            expense,
            interest_rate,
        }
    }
}

/// An input carrying a caller-supplied label (batch files)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledInput {
    pub id: String,
    #[serde(flatten)]
    pub input: Input,
}
