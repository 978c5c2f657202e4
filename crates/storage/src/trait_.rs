//! Progress store trait abstraction.

use async_trait::async_trait;
use reptrack_core::{ProgressDocument, UserId, WeekKey};

/// Error type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur while reading or writing progress documents.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote document API transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote document API rejected the request
    #[error("remote store returned status {0}")]
    RemoteStatus(reqwest::StatusCode),

    /// Other error
    #[error("{0}")]
    Other(String),
}

/// Store for per-week progress documents.
///
/// A document is addressed by (user, week key). Writes are partial
/// updates with union-overwrite semantics: keys present in the partial
/// document overwrite, every other stored key survives. A write never
/// replaces the whole document, so two sessions updating different
/// exercises in the same week do not clobber each other; for the same
/// key, the last write wins.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load the document for one user and week. `Ok(None)` when none
    /// exists yet.
    async fn read(&self, user: &UserId, week: &WeekKey) -> Result<Option<ProgressDocument>>;

    /// Merge a partial update into the stored document.
    async fn write(
        &self,
        user: &UserId,
        week: &WeekKey,
        partial: &ProgressDocument,
    ) -> Result<()>;
}
