//! Load batches of inputs from CSV
//!
//! Expected header: ask_price,income,expense,interest_rate
//! An optional `id` column labels each row; other columns are ignored.

use super::{Input, LabeledInput};
use crate::error::Result;
use csv::Reader;
use std::io::Read;
use std::path::Path;

/// Raw CSV row
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    id: Option<String>,
    ask_price: f64,
    income: f64,
    expense: f64,
    interest_rate: f64,
}

impl CsvRow {
    fn into_labeled(self, row_number: usize) -> LabeledInput {
        LabeledInput {
            id: self
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| row_number.to_string()),
            input: Input::new(self.ask_price, self.income, self.expense, self.interest_rate),
        }
    }
}

/// Load inputs from a CSV file
pub fn load_inputs(path: &Path) -> Result<Vec<LabeledInput>> {
    let file = std::fs::File::open(path)?;
    load_inputs_from_reader(file)
}

/// Load inputs from any reader (rows without an id are numbered from 1)
pub fn load_inputs_from_reader<R: Read>(reader: R) -> Result<Vec<LabeledInput>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut inputs = Vec::new();

    for (i, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        inputs.push(row.into_labeled(i + 1));
    }

    log::debug!("Loaded {} inputs", inputs.len());
    Ok(inputs)
}
