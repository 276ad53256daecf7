//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CouponArgs, RatesArgs, ScheduleArgs};

/// Accrue - Compounded overnight-rate accrual and coupon calculator
#[derive(Parser)]
#[command(name = "accrue")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Calculate a compounded rate and coupon over an accrual window
    Coupon(CouponArgs),

    /// Print the business-day accrual schedule for a date range
    Schedule(ScheduleArgs),

    /// Inspect a rate table file (row count and date coverage)
    Rates(RatesArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
