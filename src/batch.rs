//! Batch runner for evaluating many inputs at once
//!
//! Inputs are evaluated in parallel; results come back in input order.

use crate::assumptions::Assumptions;
use crate::calculator::{AffordabilityCalculator, AffordabilityResult};
use crate::error::Result;
use crate::input::LabeledInput;
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;

/// A result paired with the label of the input it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledResult {
    pub id: String,
    #[serde(flatten)]
    pub result: AffordabilityResult,
}

/// Summary of a batch run, serialized as the JSON report
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub assumptions: Assumptions,
    pub count: usize,
    pub affordable_count: usize,
    pub results: Vec<LabeledResult>,
}

/// Runs one calculator over a batch of inputs
///
/// # Example
/// ```ignore
/// let runner = BatchRunner::new(AffordabilityCalculator::default());
/// let inputs = load_inputs(Path::new("homes.csv"))?;
/// let report = runner.report(&inputs);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchRunner {
    calculator: AffordabilityCalculator,
}

impl BatchRunner {
    pub fn new(calculator: AffordabilityCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &AffordabilityCalculator {
        &self.calculator
    }

    /// Evaluate every input in parallel
    pub fn run(&self, inputs: &[LabeledInput]) -> Vec<LabeledResult> {
        log::debug!("Evaluating {} inputs", inputs.len());

        inputs
            .par_iter()
            .map(|labeled| LabeledResult {
                id: labeled.id.clone(),
                result: self.calculator.compute(&labeled.input),
            })
            .collect()
    }

    /// Evaluate and summarize
    pub fn report(&self, inputs: &[LabeledInput]) -> BatchReport {
        let results = self.run(inputs);
        let affordable_count = results.iter().filter(|r| r.result.is_affordable()).count();

        log::info!(
            "Batch complete: {} inputs, {} affordable",
            results.len(),
            affordable_count
        );

        BatchReport {
            generated_at: Utc::now(),
            assumptions: *self.calculator.assumptions(),
            count: results.len(),
            affordable_count,
            results,
        }
    }
}

/// Write results as CSV, one row per input
pub fn write_results_csv<W: Write>(writer: W, results: &[LabeledResult]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "id",
        "ask_price",
        "income",
        "expense",
        "interest_rate",
        "effective_cash_flow",
        "loan_amount",
        "delta",
    ])?;

    for row in results {
        let r = &row.result;
        csv_writer.write_record([
            row.id.clone(),
            r.input.ask_price.to_string(),
            r.input.income.to_string(),
            r.input.expense.to_string(),
            r.input.interest_rate.to_string(),
            format!("{:.2}", r.effective_cash_flow),
            format!("{:.2}", r.loan_amount),
            format!("{:.2}", r.delta),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
