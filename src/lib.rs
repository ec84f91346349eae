//! Affordability - real-estate affordability calculator
//!
//! This library provides:
//! - Effective monthly cash flow from income and expense
//! - Maximum loan over a 30-year monthly schedule (annuity present value)
//! - Delta between the asking price and that loan
//! - Query string, JSON and CSV input parsing
//! - Parallel batch evaluation

pub mod assumptions;
pub mod input;
pub mod calculator;
pub mod batch;
pub mod api;
pub mod error;

// Re-export commonly used types
pub use assumptions::Assumptions;
pub use input::{Input, LabeledInput};
pub use calculator::{AffordabilityCalculator, AffordabilityResult, compute_result};
pub use batch::{BatchRunner, BatchReport, LabeledResult};
pub use error::{AffordabilityError, Result};
