//! Day count conventions for accrual calculations.
//!
//! Day count conventions determine how interest accrues by specifying
//! how to count days between two dates and the year basis. Accrue uses
//! ACT/365 Fixed throughout.

use rust_decimal::Decimal;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations provide the year fraction calculation between two dates
/// according to a specific market convention.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Can be negative if `end` < `start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Actual/365 Fixed day count convention.
///
/// The day count is the actual number of calendar days between dates.
/// The year basis is always 365 days (ignoring leap years).
///
/// # Usage
///
/// - Sterling overnight rate (SONIA) compounding
/// - UK Gilts, AUD and NZD markets
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{365}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365F"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / Decimal::from(365)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
