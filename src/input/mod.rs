//! Request inputs and the parsers that build them

mod data;
mod parser;
pub mod loader;

pub use data::{Input, LabeledInput, ASK_PRICE_KEY, EXPENSE_KEY, INCOME_KEY, INTEREST_RATE_KEY};
pub use parser::parse_query;
pub use loader::{load_inputs, load_inputs_from_reader};
