//! In-memory store for tests and demos.

use super::{ProgressStore, Result};
use reptrack_core::{ProgressDocument, UserId, WeekKey};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-memory progress store. Documents live for the lifetime of the
/// process; merge semantics match the persistent backends.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<(UserId, WeekKey), ProgressDocument>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ProgressStore for MemoryStore {
    async fn read(&self, user: &UserId, week: &WeekKey) -> Result<Option<ProgressDocument>> {
        let documents = self.documents.lock().await;
        Ok(documents.get(&(user.clone(), week.clone())).cloned())
    }

    async fn write(
        &self,
        user: &UserId,
        week: &WeekKey,
        partial: &ProgressDocument,
    ) -> Result<()> {
        let mut documents = self.documents.lock().await;
        documents
            .entry((user.clone(), week.clone()))
            .or_default()
            .merge_from(partial);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_reads_none() {
        let store = MemoryStore::new();
        let user = UserId::new("u1");
        let week: WeekKey = "2024-W1".parse().unwrap();

        assert!(store.read(&user, &week).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn users_are_isolated() {
        let store = MemoryStore::new();
        let week: WeekKey = "2024-W1".parse().unwrap();

        store
            .write(&UserId::new("u1"), &week, &ProgressDocument::single("Plank", true))
            .await
            .unwrap();

        assert!(store.read(&UserId::new("u2"), &week).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn writes_merge_into_the_stored_document() {
        let store = MemoryStore::new();
        let user = UserId::new("u1");
        let week: WeekKey = "2024-W1".parse().unwrap();

        store
            .write(&user, &week, &ProgressDocument::single("Plank", true))
            .await
            .unwrap();
        store
            .write(&user, &week, &ProgressDocument::single("Stretching", true))
            .await
            .unwrap();

        let document = store.read(&user, &week).await.unwrap().unwrap();
        assert_eq!(document.len(), 2);
        assert!(document.is_done("Plank"));
        assert!(document.is_done("Stretching"));
    }
}
