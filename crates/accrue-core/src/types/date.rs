//! Date type for accrual calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{CoreError, CoreResult};

/// A calendar date for accrual calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// calendar-day and business-day operations. Business days are
/// Monday through Friday; no holiday calendars are applied.
///
/// # Example
///
/// ```rust
/// use accrue_core::types::Date;
///
/// let date = Date::from_ymd(2019, 2, 1).unwrap();
/// let fixing = date.add_business_days(-5);
/// assert_eq!(fixing, Date::from_ymd(2019, 1, 25).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CoreResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns today's date.
    #[must_use]
    pub fn today() -> Self {
        Date(chrono::Local::now().date_naive())
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Checks if the date is a weekday (Monday through Friday).
    #[must_use]
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Adds business days (weekdays only) to the date.
    ///
    /// Positive values move forward, negative values move backward.
    /// Zero returns the date unchanged, even on a weekend.
    #[must_use]
    pub fn add_business_days(&self, days: i64) -> Self {
        if days == 0 {
            return *self;
        }

        let direction = if days > 0 { 1i64 } else { -1i64 };
        let mut remaining = days.abs();
        let mut current = *self;

        while remaining > 0 {
            current = current.add_days(direction);
            if current.is_weekday() {
                remaining -= 1;
            }
        }

        current
    }

    /// Calculates the number of business days between two dates.
    ///
    /// Counts weekdays after `self` up to and including `other`.
    /// Returns positive if `other` is after `self`, negative otherwise.
    #[must_use]
    pub fn business_days_between(&self, other: &Date) -> i64 {
        if self == other {
            return 0;
        }

        let (start, end, sign) = if self < other {
            (*self, *other, 1i64)
        } else {
            (*other, *self, -1i64)
        };

        let mut count = 0i64;
        let mut current = start.add_days(1);

        while current <= end {
            if current.is_weekday() {
                count += 1;
            }
            current = current.add_days(1);
        }

        count * sign
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2019, 2, 1).unwrap();
        assert_eq!(date.year(), 2019);
        assert_eq!(date.month(), 2);
        assert_eq!(date.day(), 1);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2019, 2, 30).is_err());
        assert!(Date::from_ymd(2019, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2019-05-01").unwrap();
        assert_eq!(date.year(), 2019);
        assert_eq!(date.month(), 5);
        assert_eq!(date.day(), 1);

        assert!(Date::parse("01/05/2019").is_err());
        assert!(Date::parse("not-a-date").is_err());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2019, 2, 1).unwrap();
        let d2 = Date::from_ymd(2019, 5, 1).unwrap();
        assert_eq!(d1.days_between(&d2), 89);
        assert_eq!(d2.days_between(&d1), -89);
    }

    #[test]
    fn test_weekday_detection() {
        // Friday
        let friday = Date::from_ymd(2019, 2, 1).unwrap();
        assert!(friday.is_weekday());
        assert!(!friday.is_weekend());
        assert_eq!(friday.weekday(), Weekday::Fri);

        // Saturday
        let saturday = Date::from_ymd(2019, 2, 2).unwrap();
        assert!(!saturday.is_weekday());
        assert!(saturday.is_weekend());

        // Sunday
        let sunday = Date::from_ymd(2019, 2, 3).unwrap();
        assert!(sunday.is_weekend());
    }

    #[test]
    fn test_add_business_days() {
        // Starting from Monday Jan 7, 2019
        let monday = Date::from_ymd(2019, 1, 7).unwrap();

        // Add 5 business days -> next Monday
        let next_monday = Date::from_ymd(2019, 1, 14).unwrap();
        assert_eq!(monday.add_business_days(5), next_monday);

        // Subtract 1 business day -> previous Friday
        let prev_friday = Date::from_ymd(2019, 1, 4).unwrap();
        assert_eq!(monday.add_business_days(-1), prev_friday);
    }

    #[test]
    fn test_add_business_days_year_long_lag() {
        let date = Date::from_ymd(2019, 5, 1).unwrap();
        let shifted = date.add_business_days(-260);

        assert!(shifted < date);
        assert!(shifted.is_weekday());
        assert_eq!(shifted.business_days_between(&date), 260);
    }

    #[test]
    fn test_add_business_days_zero_on_weekend() {
        let saturday = Date::from_ymd(2019, 2, 2).unwrap();
        assert_eq!(saturday.add_business_days(0), saturday);
    }

    #[test]
    fn test_add_business_days_from_weekend() {
        // Saturday minus 1 business day -> Friday
        let saturday = Date::from_ymd(2019, 2, 2).unwrap();
        let friday = Date::from_ymd(2019, 2, 1).unwrap();
        assert_eq!(saturday.add_business_days(-1), friday);
    }

    #[test]
    fn test_business_days_between() {
        // Monday to Friday = 4 business days
        let monday = Date::from_ymd(2019, 1, 7).unwrap();
        let friday = Date::from_ymd(2019, 1, 11).unwrap();
        assert_eq!(monday.business_days_between(&friday), 4);

        // Reversed is negative
        assert_eq!(friday.business_days_between(&monday), -4);

        // Same day = 0
        assert_eq!(monday.business_days_between(&monday), 0);
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2019, 2, 1).unwrap();

        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);

        let d3 = d2 - 5;
        assert_eq!(d3.day(), 6);

        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2019, 2, 1).unwrap();
        assert_eq!(format!("{}", date), "2019-02-01");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2019, 2, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2019-02-01\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
