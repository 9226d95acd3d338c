//! Calendar-date stay periods and the overlap predicate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::errors::{DomainError, DomainResult, InputField};

/// Wire format for dates: calendar date only, no time or zone.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// True iff half-open intervals `[s1, e1)` and `[s2, e2)` intersect.
pub fn overlaps(s1: NaiveDate, e1: NaiveDate, s2: NaiveDate, e2: NaiveDate) -> bool {
    s1 < e2 && s2 < e1
}

/// Parse a `YYYY-MM-DD` date, tagging failures with the input they came from
pub fn parse_date(value: &str, field: InputField) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| DomainError::parse(field, value))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Half-open stay `[start, end)`: arrival day is occupied, departure day is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl StayPeriod {
    /// Build a stay, rejecting zero-length and inverted ranges
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if start >= end {
            return Err(DomainError::empty_stay(start, end));
        }
        Ok(Self { start, end })
    }

    /// Parse both ends from their wire form
    pub fn parse(start: &str, end: &str) -> DomainResult<Self> {
        let start = parse_date(start, InputField::StartDate)?;
        let end = parse_date(end, InputField::EndDate)?;
        Self::new(start, end)
    }

    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        overlaps(self.start, self.end, other.start, other.end)
    }

    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}
