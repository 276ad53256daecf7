//! Schedule command implementation.
//!
//! Prints the business-day accrual schedule for a date range, with the
//! lagged fixing date and ACT/365 fraction for each period. Needs no
//! rate table.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use accrue_core::daycounts::{Act365Fixed, DayCount};
use accrue_rates::AccrualSchedule;

use crate::cli::OutputFormat;
use crate::commands::parse_date;
use crate::output::{print_header, print_output};

/// Arguments for the schedule command.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Accrual start date (YYYY-MM-DD)
    #[arg(short, long)]
    pub start: String,

    /// Accrual end date (YYYY-MM-DD)
    #[arg(short, long)]
    pub end: String,

    /// Reset lag in business days
    #[arg(short = 'l', long, default_value = "5", value_parser = clap::value_parser!(u32).range(..=260))]
    pub reset_lag: u32,
}

/// One accrual period in the schedule listing.
#[derive(Debug, Serialize, Tabled)]
pub struct SchedulePeriodRow {
    #[tabled(rename = "Start")]
    pub start: String,
    #[tabled(rename = "End")]
    pub end: String,
    #[tabled(rename = "Fixing")]
    pub fixing: String,
    #[tabled(rename = "Days")]
    pub days: i64,
    #[tabled(rename = "Year Fraction")]
    pub year_fraction: String,
}

/// Execute the schedule command.
pub fn execute(args: ScheduleArgs, format: OutputFormat) -> Result<()> {
    let start_date = parse_date(&args.start)?;
    let end_date = parse_date(&args.end)?;

    let schedule = AccrualSchedule::generate(start_date, end_date)?;
    let day_count = Act365Fixed;

    let rows: Vec<SchedulePeriodRow> = schedule
        .periods()
        .map(|(period_start, period_end)| SchedulePeriodRow {
            start: period_start.to_string(),
            end: period_end.to_string(),
            fixing: period_end
                .add_business_days(-i64::from(args.reset_lag))
                .to_string(),
            days: day_count.day_count(period_start, period_end),
            year_fraction: format!("{:.6}", day_count.year_fraction(period_start, period_end)),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header(&format!(
                "Accrual Schedule: {} to {} ({} periods)",
                schedule.first(),
                schedule.last(),
                schedule.num_periods()
            ));
            print_output(&rows, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => {
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            println!("{}", schedule.num_periods());
        }
    }

    Ok(())
}
