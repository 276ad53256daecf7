//! # Accrue Core
//!
//! Core types and day count conventions for the Accrue rate compounding
//! calculator.
//!
//! This crate provides the foundational building blocks used throughout
//! Accrue:
//!
//! - **Types**: the [`types::Date`] newtype with calendar and business-day
//!   arithmetic
//! - **Day Counts**: the ACT/365 Fixed day count fraction calculation
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::daycounts::{Act365Fixed, DayCount};
//! use accrue_core::types::Date;
//!
//! let start = Date::from_ymd(2019, 2, 1).unwrap();
//! let end = Date::from_ymd(2019, 2, 4).unwrap();
//!
//! assert_eq!(Act365Fixed.day_count(start, end), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]

pub mod daycounts;
pub mod error;
pub mod types;

pub use error::{CoreError, CoreResult};
pub use types::Date;
