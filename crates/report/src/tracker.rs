//! Workout tracking service.

use crate::aggregate::build_report;
use chrono::NaiveDate;
use reptrack_core::{catalog, Locale, ProgressDocument, Report, UserId, WeekKey};
use reptrack_storage::{ProgressStore, StoreError};
use std::sync::Arc;
use tracing::{debug, warn};

/// Errors from tracker mutations.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// Underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Exercise name not present in the canonical catalog
    #[error("unknown exercise: {0}")]
    UnknownExercise(String),
}

/// The current week's progress as read from the store.
#[derive(Debug)]
pub struct ProgressSnapshot {
    /// Week the document is scoped to
    pub week_key: WeekKey,

    /// Sanitized completion map; empty when nothing is stored yet or the
    /// read failed
    pub document: ProgressDocument,

    /// Set when the read failed and `document` is an empty fallback
    pub fetch_error: Option<StoreError>,
}

/// A weekly report plus the fetch outcome it was computed under.
///
/// The two fields are separate signals: the report is always computed
/// from the best available data, and `fetch_error` tells the caller
/// whether that data was really read from the store.
#[derive(Debug)]
pub struct ReportOutcome {
    /// The computed report
    pub report: Report,

    /// Set when the underlying read failed and the report reflects an
    /// empty document
    pub fetch_error: Option<StoreError>,
}

impl ReportOutcome {
    /// True when the report was computed without the stored document.
    pub fn is_degraded(&self) -> bool {
        self.fetch_error.is_some()
    }
}

/// Tracking service over an injected progress store.
///
/// Holds no mutable state of its own: every snapshot and report is
/// recomputed from the store and the static catalog, so concurrent calls
/// need no coordination.
#[derive(Clone)]
pub struct WorkoutTracker {
    store: Arc<dyn ProgressStore>,
}

impl WorkoutTracker {
    /// Create a tracker over the given store.
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self { store }
    }

    /// Read the document for the week containing `date`.
    ///
    /// Entries whose name is not in the canonical catalog are dropped. A
    /// failed read degrades to an empty document; the error is carried
    /// alongside so callers can still tell the user the fetch failed.
    pub async fn progress(&self, user: &UserId, date: NaiveDate) -> ProgressSnapshot {
        let week_key = WeekKey::for_date(date);
        let plan = catalog::canonical_plan();

        let (mut document, fetch_error) = match self.store.read(user, &week_key).await {
            Ok(stored) => (stored.unwrap_or_default(), None),
            Err(e) => {
                warn!(week = %week_key, error = %e, "progress read failed, continuing with empty document");
                (ProgressDocument::new(), Some(e))
            }
        };
        document.retain(|name| plan.contains_exercise(name));

        ProgressSnapshot {
            week_key,
            document,
            fetch_error,
        }
    }

    /// Build the weekly report for the week containing `date`, with day
    /// names rendered in `locale`.
    pub async fn report(&self, user: &UserId, date: NaiveDate, locale: Locale) -> ReportOutcome {
        let snapshot = self.progress(user, date).await;
        let canonical = catalog::canonical_plan();
        let display = catalog::weekly_plan(locale);
        let report = build_report(
            &canonical,
            &display,
            &snapshot.document,
            snapshot.week_key,
        );

        ReportOutcome {
            report,
            fetch_error: snapshot.fetch_error,
        }
    }

    /// Toggle one exercise for the given week and return the flag written.
    ///
    /// The new flag is the negation of `last_seen`, the value the caller
    /// currently displays, not of a fresh read. Two sessions toggling from
    /// the same stale snapshot therefore race, and the store's last write
    /// per key wins; this is accepted for a single-user-per-document access
    /// pattern. The write is a single-key merge, so flags for other
    /// exercises are untouched.
    pub async fn toggle(
        &self,
        user: &UserId,
        week: &WeekKey,
        name: &str,
        last_seen: bool,
    ) -> Result<bool, TrackerError> {
        if !catalog::canonical_plan().contains_exercise(name) {
            return Err(TrackerError::UnknownExercise(name.to_string()));
        }

        let done = !last_seen;
        self.store
            .write(user, week, &ProgressDocument::single(name, done))
            .await?;

        debug!(user = user.as_str(), week = %week, exercise = name, done, "toggled");
        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use reptrack_core::SuggestionTier;
    use reptrack_storage::{MemoryStore, Result as StoreResult};

    struct FailingStore;

    #[async_trait::async_trait]
    impl ProgressStore for FailingStore {
        async fn read(
            &self,
            _user: &UserId,
            _week: &WeekKey,
        ) -> StoreResult<Option<ProgressDocument>> {
            Err(StoreError::Other("backend unreachable".to_string()))
        }

        async fn write(
            &self,
            _user: &UserId,
            _week: &WeekKey,
            _partial: &ProgressDocument,
        ) -> StoreResult<()> {
            Err(StoreError::Other("backend unreachable".to_string()))
        }
    }

    fn user() -> UserId {
        UserId::new("u1")
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[tokio::test]
    async fn report_round_trips_through_the_store() {
        let store = Arc::new(MemoryStore::new());
        let tracker = WorkoutTracker::new(store);
        let week = WeekKey::for_date(date());

        for name in ["Plank", "Barbell Squats", "Stretching"] {
            tracker.toggle(&user(), &week, name, false).await.unwrap();
        }

        let outcome = tracker.report(&user(), date(), Locale::En).await;
        assert!(!outcome.is_degraded());
        assert_eq!(outcome.report.completed_exercises, 3);
        assert_eq!(outcome.report.week_key, week);
    }

    #[tokio::test]
    async fn failed_read_degrades_to_an_empty_report() {
        let tracker = WorkoutTracker::new(Arc::new(FailingStore));

        let outcome = tracker.report(&user(), date(), Locale::En).await;
        assert!(outcome.is_degraded());
        assert_eq!(outcome.report.completed_exercises, 0);
        assert_eq!(outcome.report.total_exercises, 27);
        assert_eq!(outcome.report.suggestion_tier, SuggestionTier::Start);
    }

    #[tokio::test]
    async fn unknown_stored_keys_are_dropped_from_the_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let week = WeekKey::for_date(date());
        let stale: ProgressDocument =
            [("Swimming", true), ("Plank", true)].into_iter().collect();
        store.write(&user(), &week, &stale).await.unwrap();

        let tracker = WorkoutTracker::new(store);
        let snapshot = tracker.progress(&user(), date()).await;

        assert_eq!(snapshot.document.len(), 1);
        assert!(snapshot.document.is_done("Plank"));
    }

    #[tokio::test]
    async fn toggle_rejects_unknown_exercises() {
        let tracker = WorkoutTracker::new(Arc::new(MemoryStore::new()));
        let week = WeekKey::for_date(date());

        let err = tracker.toggle(&user(), &week, "Swimming", false).await;
        assert!(matches!(err, Err(TrackerError::UnknownExercise(_))));
    }

    #[tokio::test]
    async fn toggle_negates_the_last_seen_flag() {
        let store = Arc::new(MemoryStore::new());
        let tracker = WorkoutTracker::new(store.clone());
        let week = WeekKey::for_date(date());

        assert!(tracker.toggle(&user(), &week, "Plank", false).await.unwrap());
        assert!(!tracker.toggle(&user(), &week, "Plank", true).await.unwrap());

        let document = store.read(&user(), &week).await.unwrap().unwrap();
        assert!(!document.is_done("Plank"));
    }

    #[tokio::test]
    async fn stale_snapshot_toggles_race_last_write_wins() {
        let store = Arc::new(MemoryStore::new());
        let tracker = WorkoutTracker::new(store.clone());
        let week = WeekKey::for_date(date());

        // Session A completes the exercise.
        tracker.toggle(&user(), &week, "Plank", false).await.unwrap();

        // Session B still renders the pre-toggle snapshot and toggles from
        // it: the write is the negation of B's stale flag, not of the
        // stored value, so the exercise stays completed.
        let written = tracker.toggle(&user(), &week, "Plank", false).await.unwrap();
        assert!(written);

        let document = store.read(&user(), &week).await.unwrap().unwrap();
        assert!(document.is_done("Plank"));
    }

    #[tokio::test]
    async fn toggle_leaves_other_exercises_untouched() {
        let store = Arc::new(MemoryStore::new());
        let tracker = WorkoutTracker::new(store.clone());
        let week = WeekKey::for_date(date());

        tracker.toggle(&user(), &week, "Plank", false).await.unwrap();
        tracker.toggle(&user(), &week, "Barbell Squats", false).await.unwrap();
        tracker.toggle(&user(), &week, "Plank", true).await.unwrap();

        let document = store.read(&user(), &week).await.unwrap().unwrap();
        assert!(!document.is_done("Plank"));
        assert!(document.is_done("Barbell Squats"));
    }
}
