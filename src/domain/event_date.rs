// Copyright (c) 2025 - Cowboy AI, Inc.
//! Event Date Value Object
//!
//! A calendar date (year-month-day, no time component) representing when a
//! real-world event occurred. The persisted wire form is `YYYY-MM-DD`;
//! anything that does not parse is rejected at the write boundary, never
//! inside the aggregation pipeline.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Event date validation error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventDateError {
    #[error("Date is empty")]
    Empty,

    #[error("Date is not a valid YYYY-MM-DD calendar date: {0}")]
    Malformed(String),
}

/// Grouping key for month buckets: (year, month)
pub type MonthKey = (i32, u32);

/// Calendar date value object
///
/// Wraps a [`chrono::NaiveDate`] and serializes as the `YYYY-MM-DD` wire
/// form used by the document store.
///
/// # Examples
///
/// ```rust
/// use lifeline_core::domain::EventDate;
///
/// let date = EventDate::parse("2015-06-10").unwrap();
/// assert_eq!(date.month_label(), "June 2015");
/// assert_eq!(date.to_string(), "2015-06-10");
///
/// assert!(EventDate::parse("").is_err());
/// assert!(EventDate::parse("2015-13-01").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EventDate(NaiveDate);

impl EventDate {
    /// Wire format for persisted dates
    pub const FORMAT: &'static str = "%Y-%m-%d";

    /// Parse a date from its `YYYY-MM-DD` wire form
    ///
    /// # Invariants
    /// - Non-empty
    /// - Parses as a valid calendar date (no 13th month, no Feb 30)
    /// - Strictly zero-padded (`2015-06-01`, never `2015-6-1`)
    pub fn parse(input: &str) -> Result<Self, EventDateError> {
        if input.is_empty() {
            return Err(EventDateError::Empty);
        }

        let date = NaiveDate::parse_from_str(input, Self::FORMAT)
            .map_err(|_| EventDateError::Malformed(input.to_string()))?;

        // chrono's %m/%d accept unpadded components; the wire form is the
        // canonical padded rendering only
        if date.format(Self::FORMAT).to_string() != input {
            return Err(EventDateError::Malformed(input.to_string()));
        }

        Ok(Self(date))
    }

    /// Construct from calendar components, if they form a valid date
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The (year, month) grouping key for month buckets
    pub fn month_key(&self) -> MonthKey {
        (self.0.year(), self.0.month())
    }

    /// Human-readable month bucket label, e.g. `"June 2015"`
    pub fn month_label(&self) -> String {
        self.0.format("%B %Y").to_string()
    }

    /// Absolute distance in whole days to another date
    pub fn days_between(&self, other: &Self) -> i64 {
        (self.0 - other.0).num_days().abs()
    }

    /// The underlying calendar date
    pub fn inner(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for EventDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

impl TryFrom<&str> for EventDate {
    type Error = EventDateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for EventDate {
    type Error = EventDateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
