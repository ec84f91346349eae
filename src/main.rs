//! Affordability CLI
//!
//! Evaluate a single home or a CSV batch from the command line

use affordability::{
    batch::write_results_csv,
    input::load_inputs,
    AffordabilityCalculator, Assumptions, BatchRunner, Input,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "affordability", version, about = "Real-estate affordability calculator")]
struct Cli {
    /// Expense baseline as a fraction of income (default 0.35)
    #[arg(long, global = true)]
    expense_ratio: Option<f64>,

    /// Divisor applied to disposable income (default 1.2)
    #[arg(long, global = true)]
    cash_flow_weight: Option<f64>,

    /// Amortization term in months (default 360)
    #[arg(long, global = true)]
    term_months: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one input and print the result as JSON
    Eval {
        #[arg(long, allow_negative_numbers = true)]
        ask_price: f64,
        #[arg(long, allow_negative_numbers = true)]
        income: f64,
        #[arg(long, allow_negative_numbers = true)]
        expense: f64,
        /// Annual rate as a percentage (5.0 = 5%)
        #[arg(long, allow_negative_numbers = true)]
        interest_rate: f64,
    },

    /// Evaluate every row of a CSV file
    Batch {
        /// CSV with columns ask_price,income,expense,interest_rate (optional id)
        input: PathBuf,

        /// Write CSV results here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print the JSON report instead of CSV
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    /// Environment overrides first, then command-line flags
    fn assumptions(&self) -> anyhow::Result<Assumptions> {
        let from_env = Assumptions::from_env().context("reading assumptions from environment")?;
        self.apply_flags(from_env)
    }

    fn apply_flags(&self, base: Assumptions) -> anyhow::Result<Assumptions> {
        let mut assumptions = base;

        if let Some(ratio) = self.expense_ratio {
            assumptions.standard_expense_ratio = ratio;
        }
        if let Some(weight) = self.cash_flow_weight {
            assumptions.cash_flow_weight = weight;
        }
        if let Some(months) = self.term_months {
            assumptions.term_months = months;
        }

        Ok(assumptions.validate()?)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let calculator = AffordabilityCalculator::new(cli.assumptions()?);

    match cli.command {
        Command::Eval {
            ask_price,
            income,
            expense,
            interest_rate,
        } => {
            let input = Input::new(ask_price, income, expense, interest_rate);
            let result = calculator.compute(&input);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Batch { input, output, json } => {
            let inputs = load_inputs(&input)
                .with_context(|| format!("loading inputs from {}", input.display()))?;
            let runner = BatchRunner::new(calculator);

            if json {
                let report = runner.report(&inputs);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let results = runner.run(&inputs);
                match output {
                    Some(path) => {
                        let file = File::create(&path)
                            .with_context(|| format!("creating {}", path.display()))?;
                        write_results_csv(BufWriter::new(file), &results)?;
                        eprintln!("Wrote {} results to {}", results.len(), path.display());
                    }
                    None => write_results_csv(io::stdout().lock(), &results)?,
                }
            }
        }
    }

    Ok(())
}
