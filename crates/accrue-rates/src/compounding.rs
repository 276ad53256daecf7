//! Compounded coupon calculation.
//!
//! Implements the sequential ACT/365 compounding fold over an accrual
//! schedule: each period's rate is observed at a lagged fixing date and
//! compounded into a running factor.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use accrue_core::daycounts::{Act365Fixed, DayCount};
use accrue_core::types::Date;

use crate::error::{RateError, RateResult};
use crate::schedule::AccrualSchedule;
use crate::table::RateTable;

/// Inputs for a compounded coupon calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponRequest {
    /// Notional amount the coupon is computed on.
    pub notional: Decimal,
    /// Accrual start date.
    pub start_date: Date,
    /// Accrual end date.
    pub end_date: Date,
    /// Business days the rate observation precedes the date it applies to.
    pub reset_lag: u32,
}

impl CouponRequest {
    /// Creates a new coupon request.
    #[must_use]
    pub fn new(notional: Decimal, start_date: Date, end_date: Date, reset_lag: u32) -> Self {
        Self {
            notional,
            start_date,
            end_date,
            reset_lag,
        }
    }
}

/// A single accrual period's contribution to the compounded rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodAccrual {
    /// Period start date.
    pub accrual_start: Date,
    /// Period end date.
    pub accrual_end: Date,
    /// Date the period's rate was observed on (end date minus reset lag).
    pub fixing_date: Date,
    /// The rate applied to the period, as a decimal fraction.
    pub rate: Decimal,
    /// ACT/365 year fraction of the period.
    pub year_fraction: Decimal,
}

/// Result of a compounded coupon calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponResult {
    /// The compounded rate over the full accrual window, as a fraction.
    pub compounded_rate: f64,
    /// The cash coupon: notional times the compounded rate.
    pub coupon_amount: Decimal,
    /// Per-period breakdown in schedule order.
    pub periods: Vec<PeriodAccrual>,
}

/// Compounded overnight-rate coupon calculator.
///
/// Builds the business-day schedule for the accrual window, resolves one
/// rate per period at the lagged fixing date (falling back to the latest
/// earlier observation when the exact date is missing), and folds the
/// periods into a single compounding factor.
///
/// The fold is strictly sequential in schedule order; each factor update
/// depends multiplicatively on the previous one.
#[derive(Debug, Clone)]
pub struct CouponCalculator;

impl CouponCalculator {
    /// Computes the compounded rate and coupon for a request.
    ///
    /// # Errors
    ///
    /// - `RateError::ScheduleTooShort` if the accrual window contains
    ///   fewer than two business days.
    /// - `RateError::RateTableCoverage` if any fixing date precedes
    ///   every entry in the rate table.
    pub fn compute(request: &CouponRequest, table: &RateTable) -> RateResult<CouponResult> {
        let schedule = AccrualSchedule::generate(request.start_date, request.end_date)?;
        let day_count = Act365Fixed;

        let mut factor = 1.0_f64;
        let mut periods = Vec::with_capacity(schedule.num_periods());

        for (accrual_start, accrual_end) in schedule.periods() {
            let fixing_date = accrual_end.add_business_days(-i64::from(request.reset_lag));
            let rate = Self::lookup_rate(table, fixing_date)?;

            // Day count fraction depends on period boundaries, not fixing dates
            let year_fraction = day_count.year_fraction(accrual_start, accrual_end);

            let rate_f = rate.to_f64().unwrap_or(0.0);
            let dcf_f = year_fraction.to_f64().unwrap_or(0.0);
            factor *= 1.0 + rate_f * dcf_f;

            periods.push(PeriodAccrual {
                accrual_start,
                accrual_end,
                fixing_date,
                rate,
                year_fraction,
            });
        }

        let compounded_rate = factor - 1.0;

        // The coupon is derived from the same reported rate value
        let rate_decimal = Decimal::from_f64_retain(compounded_rate).unwrap_or(Decimal::ZERO);
        let coupon_amount = request.notional * rate_decimal;

        Ok(CouponResult {
            compounded_rate,
            coupon_amount,
            periods,
        })
    }

    /// Resolves the rate for a fixing date.
    ///
    /// Policy: exact match first, then the latest observation strictly
    /// earlier than the fixing date. A fixing date preceding every table
    /// entry is fatal.
    fn lookup_rate(table: &RateTable, fixing_date: Date) -> RateResult<Decimal> {
        if let Some(rate) = table.rate_on(fixing_date) {
            return Ok(rate);
        }

        match table.latest_before(fixing_date) {
            Some((substituted, rate)) => {
                tracing::debug!(
                    %fixing_date,
                    %substituted,
                    "no observation on fixing date, using latest prior rate"
                );
                Ok(rate)
            }
            None => Err(RateError::coverage(fixing_date, table.first_date())),
        }
    }
}
