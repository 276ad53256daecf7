//! # Accrue Rates
//!
//! Compounded overnight-rate accrual and coupon calculation for the Accrue
//! calculator.
//!
//! This crate provides:
//!
//! - **Rate Table**: an ordered date-to-rate map with last-known-value
//!   fallback lookup, loadable from CSV
//! - **Accrual Schedule**: business-day (Mon-Fri) schedules over a date range
//! - **Compounding**: the ACT/365 sequential compounding fold that produces
//!   a compounded rate and a cash coupon
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::types::Date;
//! use accrue_rates::{CouponCalculator, CouponRequest, RateTable};
//! use rust_decimal_macros::dec;
//!
//! let mut table = RateTable::new();
//! let mut date = Date::from_ymd(2019, 1, 1).unwrap();
//! let end = Date::from_ymd(2019, 3, 1).unwrap();
//! while date <= end {
//!     table.insert(date, dec!(0.0075));
//!     date = date.add_days(1);
//! }
//!
//! let request = CouponRequest {
//!     notional: dec!(1000000),
//!     start_date: Date::from_ymd(2019, 2, 1).unwrap(),
//!     end_date: Date::from_ymd(2019, 3, 1).unwrap(),
//!     reset_lag: 5,
//! };
//!
//! let result = CouponCalculator::compute(&request, &table).unwrap();
//! assert!(result.compounded_rate > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]

pub mod compounding;
pub mod error;
pub mod schedule;
pub mod table;

pub use compounding::{CouponCalculator, CouponRequest, CouponResult, PeriodAccrual};
pub use error::{LoadError, RateError, RateResult};
pub use schedule::AccrualSchedule;
pub use table::RateTable;
