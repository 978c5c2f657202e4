//! Static workout plan records.

use serde::Serialize;

/// One exercise in a day's fixed list.
///
/// In the canonical locale the name doubles as the storage key for the
/// completion flag, so it must stay stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    /// Exercise name, unique within a day
    pub name: &'static str,

    /// Set scheme, e.g. "4 sets"
    pub sets: &'static str,

    /// Rep scheme, e.g. "6-8 reps"
    pub reps: &'static str,

    /// Form advice shown alongside the exercise
    pub advice: &'static str,
}

/// One training day of the weekly plan.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DayPlan {
    /// Day index, 1 through 5
    pub day_index: u8,

    /// Display name of the day
    pub day_name: &'static str,

    /// Muscle groups or theme of the day
    pub focus: &'static str,

    /// Exercises in their fixed order
    pub exercises: &'static [Exercise],
}

/// A full five-day plan for one locale, ordered by day index.
#[derive(Debug, Clone, Copy)]
pub struct WeekPlan {
    /// The training days, ascending by `day_index`
    pub days: &'static [DayPlan],
}

impl WeekPlan {
    /// Total number of exercises across all days.
    pub fn total_exercises(&self) -> usize {
        self.days.iter().map(|d| d.exercises.len()).sum()
    }

    /// The plan for one day index, if it exists.
    pub fn day(&self, day_index: u8) -> Option<&'static DayPlan> {
        self.days.iter().find(|d| d.day_index == day_index)
    }

    /// Whether any day lists an exercise with this exact name.
    pub fn contains_exercise(&self, name: &str) -> bool {
        self.days
            .iter()
            .any(|d| d.exercises.iter().any(|e| e.name == name))
    }
}
