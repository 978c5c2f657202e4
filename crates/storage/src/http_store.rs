//! Remote document store client.
//!
//! Talks to a JSON document API holding one document per (user, week):
//! `GET` returns the stored map, `PATCH` sends a partial map and the
//! server merges it key by key. Authentication is handled by the
//! deployment (reverse proxy or API gateway), not here.

use super::{ProgressStore, Result, StoreError};
use reptrack_core::{ProgressDocument, UserId, WeekKey};
use reqwest::{Client, ClientBuilder, StatusCode};
use tracing::debug;

/// HTTP-backed progress store.
#[derive(Clone)]
pub struct HttpStore {
    /// HTTP client
    client: Client,

    /// Document API base URL
    base_url: String,
}

impl HttpStore {
    /// Create a client for the document API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: ClientBuilder::new()
                .timeout(std::time::Duration::from_secs(10))
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn document_url(&self, user: &UserId, week: &WeekKey) -> String {
        format!("{}/users/{}/progress/{}", self.base_url, user, week)
    }
}

#[async_trait::async_trait]
impl ProgressStore for HttpStore {
    async fn read(&self, user: &UserId, week: &WeekKey) -> Result<Option<ProgressDocument>> {
        let response = self
            .client
            .get(self.document_url(user, week))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::RemoteStatus(response.status()));
        }

        let document = response.json().await?;
        Ok(Some(document))
    }

    async fn write(
        &self,
        user: &UserId,
        week: &WeekKey,
        partial: &ProgressDocument,
    ) -> Result<()> {
        let response = self
            .client
            .patch(self.document_url(user, week))
            .json(partial)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::RemoteStatus(response.status()));
        }

        debug!(user = user.as_str(), week = %week, "partial update accepted");
        Ok(())
    }
}
