//! JSON file store implementation.
//!
//! Stores one document per (user, week) as `<root>/<user>/<week>.json`.
//! The merge happens locally: read the current document, apply the
//! partial update, write the result back.

use super::{ProgressStore, Result};
use reptrack_core::{ProgressDocument, UserId, WeekKey};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// File-based JSON progress store.
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    /// Create a store rooted at `root`, creating the directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    fn document_path(&self, user: &UserId, week: &WeekKey) -> PathBuf {
        self.root
            .join(user.as_str())
            .join(format!("{}.json", week))
    }
}

#[async_trait::async_trait]
impl ProgressStore for JsonStore {
    async fn read(&self, user: &UserId, week: &WeekKey) -> Result<Option<ProgressDocument>> {
        read_json(&self.document_path(user, week)).await
    }

    async fn write(
        &self,
        user: &UserId,
        week: &WeekKey,
        partial: &ProgressDocument,
    ) -> Result<()> {
        let path = self.document_path(user, week);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut document: ProgressDocument =
            read_json(&path).await?.unwrap_or_default();
        document.merge_from(partial);

        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&path, json.as_bytes()).await?;

        debug!(user = user.as_str(), week = %week, entries = document.len(), "progress written");
        Ok(())
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
