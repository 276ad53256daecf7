//! Rates command implementation.
//!
//! Loads a rate table file and reports its coverage.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use accrue_rates::RateTable;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output, KeyValue};

/// Arguments for the rates command.
#[derive(Args, Debug)]
pub struct RatesArgs {
    /// Path to the rate table CSV (columns: date, rate)
    #[arg(short, long, env = "ACCRUE_RATES")]
    pub rates: PathBuf,

    /// Number of head/tail sample rows to show
    #[arg(long, default_value = "5")]
    pub sample: usize,
}

/// One rate observation row for the sample listing.
#[derive(Debug, Serialize, Tabled)]
pub struct RateRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Rate")]
    pub rate: String,
}

/// Execute the rates command.
pub fn execute(args: RatesArgs, format: OutputFormat) -> Result<()> {
    let table = RateTable::load_csv(&args.rates)?;

    match format {
        OutputFormat::Table => {
            print_header("Rate Table Coverage");

            let mut rows = Vec::new();
            rows.push(KeyValue::new("File", args.rates.display().to_string()));
            rows.push(KeyValue::new("Rows", table.len().to_string()));
            rows.push(KeyValue::new(
                "First Date",
                table
                    .first_date()
                    .map_or_else(|| "-".to_string(), |d| d.to_string()),
            ));
            rows.push(KeyValue::new(
                "Last Date",
                table
                    .last_date()
                    .map_or_else(|| "-".to_string(), |d| d.to_string()),
            ));
            print_output(&rows, format)?;

            if !table.is_empty() {
                let sample = sample_rows(&table, args.sample);
                print_header("Sample");
                print_output(&sample, format)?;
            }
        }
        OutputFormat::Json | OutputFormat::Csv => {
            let rows: Vec<RateRow> = table
                .iter()
                .map(|(date, rate)| rate_row(date, rate))
                .collect();
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", table.len());
        }
    }

    Ok(())
}

/// Takes up to `n` rows from the head and tail of the table.
fn sample_rows(table: &RateTable, n: usize) -> Vec<RateRow> {
    let total = table.len();
    if total <= 2 * n {
        return table.iter().map(|(d, r)| rate_row(d, r)).collect();
    }

    let mut rows: Vec<RateRow> = table.iter().take(n).map(|(d, r)| rate_row(d, r)).collect();
    rows.push(RateRow {
        date: "...".to_string(),
        rate: "...".to_string(),
    });
    rows.extend(
        table
            .iter()
            .skip(total - n)
            .map(|(d, r)| rate_row(d, r)),
    );
    rows
}

fn rate_row(date: accrue_core::types::Date, rate: Decimal) -> RateRow {
    RateRow {
        date: date.to_string(),
        rate: format!("{:.4}%", rate * Decimal::ONE_HUNDRED),
    }
}
