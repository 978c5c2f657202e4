//! Week identifiers for progress partitioning.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier for one calendar week, the partition key for progress
/// documents.
///
/// Rendered as `"<year>-W<week>"` with no zero padding. The week number
/// counts (partial) weeks since January 1st of the date's year, anchored to
/// the weekday January 1st fell on. This is deliberately not ISO-8601:
/// every stored document is keyed by this formula, so it must never change.
/// Keys compare correctly only within a single year; `2025-W1` does not
/// sort after `2024-W53` as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekKey(String);

impl WeekKey {
    /// Derive the week key for a calendar date. Total: every valid date
    /// maps to a key.
    pub fn for_date(date: NaiveDate) -> Self {
        let jan1 = date.with_ordinal(1).unwrap_or(date);
        let past_days = date.ordinal0();
        let offset = jan1.weekday().num_days_from_sunday();
        let week = (past_days + offset + 1).div_ceil(7);
        Self(format!("{}-W{}", date.year(), week))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WeekKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::str::FromStr for WeekKey {
    type Err = WeekKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, week) = s.split_once("-W").ok_or_else(|| WeekKeyError(s.to_string()))?;
        if year.parse::<i32>().is_err() || week.parse::<u32>().is_err() {
            return Err(WeekKeyError(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

/// Error returned when a string is not a valid week key.
#[derive(Debug, thiserror::Error)]
#[error("invalid week key: {0}")]
pub struct WeekKeyError(String);
