//! Accrual schedule generation.
//!
//! Generates the ordered sequence of business days (Monday-Friday)
//! between two dates inclusive. No holiday calendars are applied; the
//! weekly pattern is fixed.

use accrue_core::types::Date;

use crate::error::{RateError, RateResult};

/// An ordered sequence of business days over an accrual window.
///
/// A schedule always contains at least two dates; [`AccrualSchedule::generate`]
/// refuses to construct anything shorter.
///
/// # Example
///
/// ```rust
/// use accrue_core::types::Date;
/// use accrue_rates::AccrualSchedule;
///
/// let schedule = AccrualSchedule::generate(
///     Date::from_ymd(2019, 2, 1).unwrap(),
///     Date::from_ymd(2019, 2, 8).unwrap(),
/// )
/// .unwrap();
///
/// // Fri 1st, Mon 4th .. Fri 8th
/// assert_eq!(schedule.dates().len(), 6);
/// assert_eq!(schedule.num_periods(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccrualSchedule {
    dates: Vec<Date>,
}

impl AccrualSchedule {
    /// Generates the business-day schedule from `start` to `end` inclusive.
    ///
    /// Weekend endpoints are simply not included; no rolling is applied.
    ///
    /// # Errors
    ///
    /// Returns `RateError::ScheduleTooShort` if the range contains fewer
    /// than two business days. This covers `end` before `start`,
    /// single-day ranges, and weekend-only ranges.
    pub fn generate(start: Date, end: Date) -> RateResult<Self> {
        let mut dates = Vec::new();
        let mut current = start;

        while current <= end {
            if current.is_weekday() {
                dates.push(current);
            }
            current = current.add_days(1);
        }

        if dates.len() < 2 {
            return Err(RateError::schedule_too_short(dates.len()));
        }

        Ok(Self { dates })
    }

    /// Returns the schedule dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns an iterator over consecutive (start, end) accrual periods.
    pub fn periods(&self) -> impl Iterator<Item = (Date, Date)> + '_ {
        self.dates.windows(2).map(|w| (w[0], w[1]))
    }

    /// Returns the number of accrual periods in the schedule.
    #[must_use]
    pub fn num_periods(&self) -> usize {
        self.dates.len() - 1
    }

    /// Returns the first schedule date.
    #[must_use]
    pub fn first(&self) -> Date {
        // Invariant: a schedule holds at least two dates
        self.dates[0]
    }

    /// Returns the last schedule date.
    #[must_use]
    pub fn last(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_generate_full_week() {
        // Fri 2019-02-01 through Fri 2019-02-08
        let schedule = AccrualSchedule::generate(date(2019, 2, 1), date(2019, 2, 8)).unwrap();

        assert_eq!(
            schedule.dates(),
            &[
                date(2019, 2, 1),
                date(2019, 2, 4),
                date(2019, 2, 5),
                date(2019, 2, 6),
                date(2019, 2, 7),
                date(2019, 2, 8),
            ]
        );
        assert_eq!(schedule.first(), date(2019, 2, 1));
        assert_eq!(schedule.last(), date(2019, 2, 8));
    }

    #[test]
    fn test_generate_weekend_endpoints_excluded() {
        // Sat 2019-02-02 through Sun 2019-02-10: only the weekdays in between
        let schedule = AccrualSchedule::generate(date(2019, 2, 2), date(2019, 2, 10)).unwrap();

        assert!(schedule.dates().iter().all(Date::is_weekday));
        assert_eq!(schedule.first(), date(2019, 2, 4));
        assert_eq!(schedule.last(), date(2019, 2, 8));
    }

    #[test]
    fn test_periods_are_consecutive_pairs() {
        let schedule = AccrualSchedule::generate(date(2019, 2, 1), date(2019, 2, 5)).unwrap();
        let periods: Vec<_> = schedule.periods().collect();

        assert_eq!(periods.len(), schedule.num_periods());
        assert_eq!(periods[0], (date(2019, 2, 1), date(2019, 2, 4)));
        assert_eq!(periods[1], (date(2019, 2, 4), date(2019, 2, 5)));
    }

    #[test]
    fn test_single_day_range_fails() {
        let result = AccrualSchedule::generate(date(2019, 2, 1), date(2019, 2, 1));
        assert_eq!(result, Err(RateError::ScheduleTooShort { count: 1 }));
    }

    #[test]
    fn test_weekend_only_range_fails() {
        let result = AccrualSchedule::generate(date(2019, 2, 2), date(2019, 2, 3));
        assert_eq!(result, Err(RateError::ScheduleTooShort { count: 0 }));
    }

    #[test]
    fn test_end_before_start_fails() {
        let result = AccrualSchedule::generate(date(2019, 5, 1), date(2019, 2, 1));
        assert_eq!(result, Err(RateError::ScheduleTooShort { count: 0 }));
    }

    #[test]
    fn test_reference_window_has_64_dates() {
        // 2019-02-01 to 2019-05-01 contains 64 business days
        let schedule = AccrualSchedule::generate(date(2019, 2, 1), date(2019, 5, 1)).unwrap();
        assert_eq!(schedule.dates().len(), 64);
        assert_eq!(schedule.num_periods(), 63);
    }
}
