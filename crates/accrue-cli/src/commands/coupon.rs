//! Coupon command implementation.
//!
//! Calculates the compounded rate and cash coupon for an accrual window.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use accrue_rates::{CouponCalculator, CouponRequest, RateTable};

use crate::cli::OutputFormat;
use crate::commands::{parse_date, validate_notional};
use crate::output::{
    format_money, format_percent, print_header, print_output, print_success, KeyValue,
};

/// Arguments for the coupon command.
#[derive(Args, Debug)]
pub struct CouponArgs {
    /// Path to the rate table CSV (columns: date, rate)
    #[arg(short, long, env = "ACCRUE_RATES")]
    pub rates: PathBuf,

    /// Notional amount
    #[arg(short, long, default_value = "1000000", allow_negative_numbers = true)]
    pub notional: f64,

    /// Accrual start date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,

    /// Accrual end date (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: String,

    /// Reset lag in business days
    #[arg(short = 'l', long, default_value = "5", value_parser = clap::value_parser!(u32).range(..=260))]
    pub reset_lag: u32,

    /// Include the per-period accrual breakdown
    #[arg(short, long)]
    pub breakdown: bool,
}

/// One accrual period row for the breakdown table.
#[derive(Debug, Serialize, Tabled)]
pub struct PeriodRow {
    #[tabled(rename = "Start")]
    pub start: String,
    #[tabled(rename = "End")]
    pub end: String,
    #[tabled(rename = "Fixing")]
    pub fixing: String,
    #[tabled(rename = "Rate")]
    pub rate: String,
    #[tabled(rename = "Year Fraction")]
    pub year_fraction: String,
}

/// Execute the coupon command.
pub fn execute(args: CouponArgs, format: OutputFormat) -> Result<()> {
    let notional = validate_notional(args.notional)?;
    let start_date = parse_date(&args.start)?;
    let end_date = parse_date(&args.end)?;

    // The table is loaded once and read-only for the calculation
    let table = RateTable::load_csv(&args.rates)?;

    let request = CouponRequest::new(notional, start_date, end_date, args.reset_lag);
    let result = CouponCalculator::compute(&request, &table)?;

    match format {
        OutputFormat::Table => {
            print_header("Compounded Coupon");

            let mut rows = Vec::new();
            rows.push(KeyValue::new("Notional", format_money(notional)));
            rows.push(KeyValue::new("Start Date", start_date.to_string()));
            rows.push(KeyValue::new("End Date", end_date.to_string()));
            rows.push(KeyValue::new(
                "Reset Lag",
                format!("{} business days", args.reset_lag),
            ));
            rows.push(KeyValue::new("Periods", result.periods.len().to_string()));
            rows.push(KeyValue::new("", "")); // Separator
            rows.push(KeyValue::new(
                "Compounded Rate",
                format_percent(result.compounded_rate),
            ));
            rows.push(KeyValue::new(
                "Coupon Amount",
                format_money(result.coupon_amount),
            ));
            print_output(&rows, format)?;

            if args.breakdown {
                print_header("Accrual Periods");
                let period_rows: Vec<PeriodRow> =
                    result.periods.iter().map(period_row).collect();
                print_output(&period_rows, format)?;
            }

            print_success(&format!(
                "Compounded rate: {}",
                format_percent(result.compounded_rate)
            ));
            print_success(&format!(
                "Coupon amount: {}",
                format_money(result.coupon_amount)
            ));
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Csv => {
            let period_rows: Vec<PeriodRow> = result.periods.iter().map(period_row).collect();
            print_output(&period_rows, format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", result.coupon_amount);
        }
    }

    Ok(())
}

fn period_row(period: &accrue_rates::PeriodAccrual) -> PeriodRow {
    PeriodRow {
        start: period.accrual_start.to_string(),
        end: period.accrual_end.to_string(),
        fixing: period.fixing_date.to_string(),
        rate: format_rate(period.rate),
        year_fraction: format!("{:.6}", period.year_fraction),
    }
}

fn format_rate(rate: Decimal) -> String {
    format!("{:.4}%", rate * Decimal::ONE_HUNDRED)
}
