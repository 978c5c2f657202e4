//! Weekly progress reporting.
//!
//! Pure aggregation of completion flags into a weekly report, plus the
//! tracker service that reads, sanitizes, and toggles stored progress.

#![warn(missing_docs)]

pub mod aggregate;
pub mod tracker;

pub use aggregate::build_report;
pub use tracker::{ProgressSnapshot, ReportOutcome, TrackerError, WorkoutTracker};
