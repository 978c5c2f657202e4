//! RepTrack core data models.
//!
//! This crate defines the domain types shared by the tracker: the static
//! workout catalog, week identifiers, progress documents, and the derived
//! weekly report.

#![warn(missing_docs)]

// Week partitioning
mod week;

// Static plan
mod plan;
pub mod catalog;

// Stored progress
mod document;

// Derived report
mod report;

// Re-exports
pub use week::{WeekKey, WeekKeyError};
pub use plan::{DayPlan, Exercise, WeekPlan};
pub use catalog::Locale;
pub use document::{ProgressDocument, UserId};
pub use report::{DayReport, Report, SuggestionTier};
