//! Reporting-period types
//!
//! Movements are bucketed by the month or day the business observes, which
//! depends on the reporting timezone, not on UTC. This module provides the
//! timezone wrapper and the ordered period keys used by the aggregation
//! layer.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reporting timezone for period bucketing
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s)
            .map(Timezone)
            .map_err(|_| serde::de::Error::custom(format!("Invalid timezone: {}", s)))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Converts a UTC datetime to the local timezone
    pub fn to_local(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.0)
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),

    #[error("Unparseable period key: {0}")]
    UnparseablePeriod(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// A calendar month in the reporting timezone, keyed as `YYYY-MM`
///
/// Ordered chronologically, so a `BTreeMap<MonthKey, _>` iterates oldest
/// month first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Creates a month key, validating the month range.
    pub fn new(year: i32, month: u32) -> Result<Self, TemporalError> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// Month key of a UTC instant, observed in the given timezone.
    pub fn of(instant: DateTime<Utc>, tz: &Timezone) -> Self {
        let local = tz.to_local(instant);
        Self {
            year: local.year(),
            month: local.month(),
        }
    }

    /// The following calendar month. Used for runway projections.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| TemporalError::UnparseablePeriod(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| TemporalError::UnparseablePeriod(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| TemporalError::UnparseablePeriod(s.to_string()))?;
        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A calendar day in the reporting timezone, rendered `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(pub NaiveDate);

impl DayKey {
    /// Day key of a UTC instant, observed in the given timezone.
    pub fn of(instant: DateTime<Utc>, tz: &Timezone) -> Self {
        Self(tz.to_local(instant).date_naive())
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.0.year(),
            month: self.0.month(),
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(DayKey)
            .map_err(|_| TemporalError::UnparseablePeriod(s.to_string()))
    }
}

impl Serialize for DayKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_month_key_validation() {
        assert!(MonthKey::new(2024, 12).is_ok());
        assert_eq!(
            MonthKey::new(2024, 13),
            Err(TemporalError::InvalidMonth(13))
        );
        assert_eq!(MonthKey::new(2024, 0), Err(TemporalError::InvalidMonth(0)));
    }

    #[test]
    fn test_month_key_display_and_parse() {
        let key = MonthKey::new(2024, 3).unwrap();
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!("2024-03".parse::<MonthKey>().unwrap(), key);
    }

    #[test]
    fn test_month_key_next_rolls_over_year() {
        let dec = MonthKey::new(2024, 12).unwrap();
        assert_eq!(dec.next(), MonthKey::new(2025, 1).unwrap());
        let jan = MonthKey::new(2024, 1).unwrap();
        assert_eq!(jan.next(), MonthKey::new(2024, 2).unwrap());
    }

    #[test]
    fn test_month_key_respects_timezone() {
        // 23:30 UTC on Jan 31 is already February in Madrid (UTC+1).
        let instant = Utc.with_ymd_and_hms(2024, 1, 31, 23, 30, 0).unwrap();
        let madrid = Timezone::new(chrono_tz::Europe::Madrid);
        assert_eq!(
            MonthKey::of(instant, &madrid),
            MonthKey::new(2024, 2).unwrap()
        );
        assert_eq!(
            MonthKey::of(instant, &Timezone::default()),
            MonthKey::new(2024, 1).unwrap()
        );
    }

    #[test]
    fn test_day_key_display_and_parse() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let key = DayKey::of(instant, &Timezone::default());
        assert_eq!(key.to_string(), "2024-06-15");
        assert_eq!("2024-06-15".parse::<DayKey>().unwrap(), key);
        assert_eq!(key.month_key(), MonthKey::new(2024, 6).unwrap());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = MonthKey::new(2023, 12).unwrap();
        let b = MonthKey::new(2024, 1).unwrap();
        assert!(a < b);
    }
}
