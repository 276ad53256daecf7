//! Rate table storage and lookup.
//!
//! Provides storage and retrieval of daily reference-rate observations
//! (SONIA-style overnight fixings). Internally uses a `BTreeMap` for
//! ordered date access, enabling the last-known-value fallback lookup
//! used by the compounding calculator.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use accrue_core::types::Date;

use crate::error::LoadError;

/// CSV record for a single daily rate observation.
#[derive(Debug, Deserialize)]
struct RateRecord {
    date: Date,
    rate: Decimal,
}

/// An ordered mapping from calendar date to daily rate.
///
/// Rates are decimal fractions (0.0075 means 0.75%). The table performs
/// no completeness validation; gaps are tolerated and resolved at lookup
/// time via [`RateTable::latest_before`].
///
/// # Example
///
/// ```rust
/// use accrue_core::types::Date;
/// use accrue_rates::RateTable;
/// use rust_decimal_macros::dec;
///
/// let mut table = RateTable::new();
/// table.insert(Date::from_ymd(2019, 2, 1).unwrap(), dec!(0.0075));
///
/// let rate = table.rate_on(Date::from_ymd(2019, 2, 1).unwrap());
/// assert_eq!(rate, Some(dec!(0.0075)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    rates: BTreeMap<Date, Decimal>,
}

impl RateTable {
    /// Creates a new empty rate table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Inserts a rate observation.
    ///
    /// Inserting twice for the same date overwrites the earlier value.
    pub fn insert(&mut self, date: Date, rate: Decimal) {
        self.rates.insert(date, rate);
    }

    /// Creates a table from a vector of date-rate pairs.
    ///
    /// Input order is irrelevant; the table orders entries by date.
    #[must_use]
    pub fn from_rates(rates: Vec<(Date, Decimal)>) -> Self {
        let mut table = Self::new();
        for (date, rate) in rates {
            table.insert(date, rate);
        }
        table
    }

    /// Retrieves the rate for an exact date.
    #[must_use]
    pub fn rate_on(&self, date: Date) -> Option<Decimal> {
        self.rates.get(&date).copied()
    }

    /// Returns the latest observation strictly earlier than the given date.
    ///
    /// Never returns an entry on or after `date`.
    #[must_use]
    pub fn latest_before(&self, date: Date) -> Option<(Date, Decimal)> {
        self.rates.range(..date).next_back().map(|(d, r)| (*d, *r))
    }

    /// Returns the number of observations in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns true if the table has no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Returns the earliest date in the table.
    #[must_use]
    pub fn first_date(&self) -> Option<Date> {
        self.rates.keys().next().copied()
    }

    /// Returns the latest date in the table.
    #[must_use]
    pub fn last_date(&self) -> Option<Date> {
        self.rates.keys().next_back().copied()
    }

    /// Iterates over all observations in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, Decimal)> + '_ {
        self.rates.iter().map(|(d, r)| (*d, *r))
    }

    /// Loads a rate table from a CSV file.
    ///
    /// Expected format: a header row `date,rate`, then one row per
    /// observation with an ISO 8601 date and a decimal-fraction rate.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the file cannot be opened or a record
    /// cannot be parsed.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let file = File::open(path.as_ref())?;
        let table = Self::from_csv_reader(file)?;
        tracing::debug!(
            rows = table.len(),
            first = ?table.first_date(),
            last = ?table.last_date(),
            "loaded rate table"
        );
        Ok(table)
    }

    /// Loads a rate table from any CSV reader.
    ///
    /// Duplicate dates are resolved last-row-wins.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Csv` if a record cannot be parsed.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut table = Self::new();

        for result in csv_reader.deserialize() {
            let record: RateRecord = result?;
            table.insert(record.date, record.rate);
        }

        Ok(table)
    }
}
