//! Reporting windows
//!
//! The route layer scopes aggregation with `year` / `month` query
//! parameters; a window narrows a movement set to the periods the caller
//! asked for, observed in the reporting timezone.

use chrono::{DateTime, Utc};
use core_kernel::{MonthKey, Timezone};

use crate::error::FinanceError;
use crate::movement::Movement;

/// The period a request aggregates over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportingWindow {
    /// Every movement on record.
    #[default]
    All,
    /// One fiscal year.
    Year(i32),
    /// One calendar month.
    Month(MonthKey),
}

impl ReportingWindow {
    /// Builds a window from optional query parameters.
    ///
    /// A month without a year is rejected; an out-of-range month surfaces as
    /// a temporal error. These are the only validation failures in the
    /// domain, and they belong to the HTTP boundary.
    pub fn from_query(year: Option<i32>, month: Option<u32>) -> Result<Self, FinanceError> {
        match (year, month) {
            (None, None) => Ok(Self::All),
            (Some(year), None) => Ok(Self::Year(year)),
            (Some(year), Some(month)) => Ok(Self::Month(MonthKey::new(year, month)?)),
            (None, Some(month)) => Err(FinanceError::MonthWithoutYear(month)),
        }
    }

    /// Whether an instant falls inside this window, observed in `tz`.
    pub fn contains(&self, instant: DateTime<Utc>, tz: &Timezone) -> bool {
        let key = MonthKey::of(instant, tz);
        match self {
            Self::All => true,
            Self::Year(year) => key.year == *year,
            Self::Month(month) => key == *month,
        }
    }

    /// Narrows a movement set to this window.
    pub fn apply(&self, mut movements: Vec<Movement>, tz: &Timezone) -> Vec<Movement> {
        if matches!(self, Self::All) {
            return movements;
        }
        movements.retain(|m| self.contains(m.occurred_at, tz));
        movements
    }
}
