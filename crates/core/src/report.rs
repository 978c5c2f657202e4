//! Weekly report model and suggestion tiers.

use crate::week::WeekKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Suggestion tier selected from the weekly completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionTier {
    /// Nothing completed yet
    Start,
    /// Some progress, below half
    GoodStart,
    /// At least half the week done
    GreatWork,
    /// At least 80 percent done
    Excellent,
    /// Every exercise completed
    Perfect,
}

impl SuggestionTier {
    /// Highest tier whose threshold the percentage reaches. Thresholds are
    /// inclusive lower bounds: exactly 50, 80, or 100 takes the higher tier.
    pub fn for_percentage(percentage: u8) -> Self {
        if percentage >= 100 {
            SuggestionTier::Perfect
        } else if percentage >= 80 {
            SuggestionTier::Excellent
        } else if percentage >= 50 {
            SuggestionTier::GreatWork
        } else if percentage > 0 {
            SuggestionTier::GoodStart
        } else {
            SuggestionTier::Start
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionTier::Start => "Start",
            SuggestionTier::GoodStart => "GoodStart",
            SuggestionTier::GreatWork => "GreatWork",
            SuggestionTier::Excellent => "Excellent",
            SuggestionTier::Perfect => "Perfect",
        }
    }
}

/// Completion counts for one training day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// Exercises planned for the day
    pub total: usize,

    /// Exercises completed
    pub completed: usize,

    /// Display name of the day
    pub day_name: String,
}

/// Derived weekly completion report. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Week the report covers
    pub week_key: WeekKey,

    /// Exercises planned across the week
    pub total_exercises: usize,

    /// Exercises completed across the week
    pub completed_exercises: usize,

    /// Rounded completion percentage, 0 through 100
    pub completion_percentage: u8,

    /// Per-day breakdown, ascending by day index
    pub per_day: BTreeMap<u8, DayReport>,

    /// Tier selected from the completion percentage
    pub suggestion_tier: SuggestionTier,
}
