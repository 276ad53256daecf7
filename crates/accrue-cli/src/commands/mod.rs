//! CLI command implementations.

pub mod coupon;
pub mod rates;
pub mod schedule;

// Re-export argument structs for convenience
pub use coupon::CouponArgs;
pub use rates::RatesArgs;
pub use schedule::ScheduleArgs;

use rust_decimal::Decimal;

use accrue_core::types::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Validates a notional amount and converts it to a decimal.
pub fn validate_notional(notional: f64) -> CliResult<Decimal> {
    if notional <= 0.0 {
        return Err(CliError::InvalidNotional(notional));
    }
    Decimal::from_f64_retain(notional).ok_or(CliError::InvalidNotional(notional))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2019-02-01").is_ok());
        assert!(parse_date("01/02/2019").is_err());
        assert!(parse_date("2019-02-30").is_err());
    }

    #[test]
    fn test_validate_notional() {
        assert!(validate_notional(1_000_000.0).is_ok());
        assert!(validate_notional(0.0).is_err());
        assert!(validate_notional(-5.0).is_err());
    }
}
