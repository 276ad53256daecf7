//! Error types for rate calculations.

use thiserror::Error;

use accrue_core::types::Date;

/// A specialized Result type for rate calculations.
pub type RateResult<T> = Result<T, RateError>;

/// Errors that can occur during a coupon calculation.
///
/// Any of these errors aborts the calculation immediately; no partial
/// result is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    /// The accrual schedule has fewer than two business days.
    #[error("Insufficient schedule dates: period contains {count} business day(s), need at least 2")]
    ScheduleTooShort {
        /// Number of business days the range produced.
        count: usize,
    },

    /// A fixing date precedes every entry in the rate table.
    #[error("Rate table does not cover period: no rate available on or before {fixing_date}")]
    RateTableCoverage {
        /// The fixing date that could not be resolved.
        fixing_date: Date,
        /// Earliest date in the table, if the table is non-empty.
        earliest: Option<Date>,
    },
}

impl RateError {
    /// Creates a schedule-too-short error.
    #[must_use]
    pub fn schedule_too_short(count: usize) -> Self {
        Self::ScheduleTooShort { count }
    }

    /// Creates a rate table coverage error.
    #[must_use]
    pub fn coverage(fixing_date: Date, earliest: Option<Date>) -> Self {
        Self::RateTableCoverage {
            fixing_date,
            earliest,
        }
    }
}

/// Errors that can occur while loading a rate table from a file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to open or read the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a CSV record.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_too_short_display() {
        let err = RateError::schedule_too_short(1);
        assert!(err.to_string().contains("Insufficient schedule dates"));
        assert!(err.to_string().contains('1'));
    }

    #[test]
    fn test_coverage_display() {
        let fixing = Date::from_ymd(2019, 1, 25).unwrap();
        let earliest = Date::from_ymd(2019, 2, 1).unwrap();
        let err = RateError::coverage(fixing, Some(earliest));
        assert!(err.to_string().contains("does not cover"));
        assert!(err.to_string().contains("2019-01-25"));
    }
}
