//! Calendar-day keys.
//!
//! A [`DayKey`] is a date normalized to day granularity and rendered as
//! `yyyy-mm-dd`. Keys compare, hash and increment without any time-of-day or
//! timezone involvement, so they can be used directly as lookup keys against
//! feed dates.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// strftime pattern of the normalized key representation.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// Long display pattern, e.g. "January 5, 2020".
const LONG_FORMAT: &str = "%B %-d, %Y";

/// Errors produced while parsing or shifting day keys.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DayKeyError {
    #[error("Invalid date '{0}': expected yyyy-mm-dd")]
    Invalid(String),

    #[error("Date {day} shifted by {offset} days is outside the supported calendar")]
    OutOfRange { day: DayKey, offset: i64 },
}

/// A single calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a key from its components, returning `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse a normalized `yyyy-mm-dd` key.
    ///
    /// Surrounding whitespace is ignored. Anything else that is not exactly
    /// ten characters of the normalized form is rejected, so `2020-1-5` or
    /// `2020-01-05T00:00:00` never alias a valid key.
    pub fn parse(input: &str) -> Result<Self, DayKeyError> {
        let trimmed = input.trim();
        if trimmed.len() != 10 {
            return Err(DayKeyError::Invalid(input.to_string()));
        }
        NaiveDate::parse_from_str(trimmed, DAY_KEY_FORMAT)
            .map(Self)
            .map_err(|_| DayKeyError::Invalid(input.to_string()))
    }

    /// Shift the key by `offset` whole days (negative moves backwards).
    pub fn add_days(self, offset: i64) -> Result<Self, DayKeyError> {
        let magnitude = Days::new(offset.unsigned_abs());
        let shifted = if offset >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        shifted
            .map(Self)
            .ok_or(DayKeyError::OutOfRange { day: self, offset })
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(self, other: DayKey) -> i64 {
        (other.0 - self.0).num_days()
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Human-readable form used on cards and in the detail view.
    pub fn long_display(self) -> String {
        self.0.format(LONG_FORMAT).to_string()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DayKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DayKey {
        DayKey::parse(s).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let day = key("2020-01-05");
        assert_eq!(day.to_string(), "2020-01-05");
        assert_eq!(day, DayKey::from_ymd(2020, 1, 5).unwrap());
        assert_eq!(key("  2020-01-05 "), day);
    }

    #[test]
    fn test_parse_rejects_non_normalized_input() {
        assert!(DayKey::parse("").is_err());
        assert!(DayKey::parse("2020-1-5").is_err());
        assert!(DayKey::parse("2020-01-05T00:00:00").is_err());
        assert!(DayKey::parse("2020-02-30").is_err());
        assert!(DayKey::parse("not a date").is_err());
        assert_eq!(
            DayKey::parse("05/01/2020"),
            Err(DayKeyError::Invalid("05/01/2020".to_string()))
        );
    }

    #[test]
    fn test_add_days_crosses_month_and_year() {
        assert_eq!(key("2020-01-31").add_days(1).unwrap(), key("2020-02-01"));
        assert_eq!(key("2019-12-31").add_days(1).unwrap(), key("2020-01-01"));
        assert_eq!(key("2020-01-01").add_days(-1).unwrap(), key("2019-12-31"));
        assert_eq!(key("2020-02-28").add_days(1).unwrap(), key("2020-02-29"));
        assert_eq!(key("2021-02-28").add_days(1).unwrap(), key("2021-03-01"));
        assert_eq!(key("2020-01-31").add_days(-8).unwrap(), key("2020-01-23"));
    }

    #[test]
    fn test_add_days_out_of_range() {
        let last = DayKey::new(NaiveDate::MAX);
        assert!(matches!(
            last.add_days(1),
            Err(DayKeyError::OutOfRange { offset: 1, .. })
        ));
    }

    #[test]
    fn test_days_until() {
        assert_eq!(key("2020-01-01").days_until(key("2020-01-31")), 30);
        assert_eq!(key("2020-01-31").days_until(key("2020-01-01")), -30);
    }

    #[test]
    fn test_ordering_matches_calendar() {
        assert!(key("2019-12-25") < key("2020-01-01"));
        assert!(key("2020-01-10") > key("2020-01-09"));
    }

    #[test]
    fn test_long_display() {
        assert_eq!(key("2020-01-05").long_display(), "January 5, 2020");
        assert_eq!(key("1995-06-16").long_display(), "June 16, 1995");
    }

    #[test]
    fn test_serde_uses_key_string() {
        let day = key("2020-03-14");
        assert_eq!(serde_json::to_string(&day).unwrap(), "\"2020-03-14\"");
        let back: DayKey = serde_json::from_str("\"2020-03-14\"").unwrap();
        assert_eq!(back, day);
        assert!(serde_json::from_str::<DayKey>("\"March 14\"").is_err());
    }
}
