//! Calendar dates in the `YYYY-MM-DD` form used by the transactions file.
//!
//! `chrono` is lenient about field widths (it will happily read `2024-1-5`), so the shape of the
//! string is checked before the calendar is consulted.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// The `strftime` format of a stored date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns `true` if `s` is exactly `YYYY-MM-DD` and names a real calendar date.
///
/// # Examples
/// ```
/// # use fintrack::model::is_valid_date;
/// assert!(is_valid_date("2024-02-29"));
/// assert!(!is_valid_date("2023-02-29"));
/// assert!(!is_valid_date("2024/02/01"));
/// ```
pub fn is_valid_date(s: &str) -> bool {
    Date::from_str(s).is_ok()
}

/// A validated calendar date. Displays and serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

/// The reason a string could not be read as a `Date`.
#[derive(Clone, PartialEq, Eq)]
pub enum DateError {
    /// The string is not shaped like `YYYY-MM-DD`.
    Format(String),
    /// The string is shaped correctly but the date does not exist, e.g. `2023-02-30`.
    Calendar(String),
}

impl Debug for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DateError::Format(s) => write!(f, "'{s}' is not in YYYY-MM-DD format"),
            DateError::Calendar(s) => write!(f, "'{s}' is not a real calendar date"),
        }
    }
}

impl std::error::Error for DateError {}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(ix, b)| match ix {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !has_date_shape(s) {
            return Err(DateError::Format(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Date)
            .map_err(|_| DateError::Calendar(s.to_string()))
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Date::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl From<NaiveDate> for Date {
    fn from(value: NaiveDate) -> Self {
        Date(value)
    }
}
