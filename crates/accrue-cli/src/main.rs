//! Accrue CLI - compounded overnight-rate and coupon calculator.
//!
//! # Usage
//!
//! ```bash
//! # Calculate a compounded coupon
//! accrue coupon --rates sonia_rates.csv --start 2019-02-01 --end 2019-05-01
//!
//! # Show the accrual schedule with fixing dates
//! accrue schedule --start 2019-02-01 --end 2019-05-01 --reset-lag 5
//!
//! # Inspect a rate table file
//! accrue rates --rates sonia_rates.csv
//! ```

use clap::Parser;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
    }

    let format = cli.format;

    let result = match cli.command {
        Commands::Coupon(args) => commands::coupon::execute(args, format),
        Commands::Schedule(args) => commands::schedule::execute(args, format),
        Commands::Rates(args) => commands::rates::execute(args, format),
    };

    if let Err(err) = result {
        output::print_error(&err.to_string());
        std::process::exit(1);
    }
}
