//! In-memory history store
//!
//! Keeps browsing history visits in memory and marks them as synchronized
//! when a sync runs with a valid token.

use crate::credentials::SyncAuthInfo;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use syncgate_domain::error::{Error, Result};
use syncgate_domain::ports::SyncableStore;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// One recorded page visit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryVisit {
    /// Visited URL
    pub url: String,
    /// When the visit happened
    pub visited_at: DateTime<Utc>,
    /// Whether the visit was uploaded by a sync
    pub synced: bool,
}

#[derive(Debug, Default)]
struct HistoryState {
    visits: Vec<HistoryVisit>,
    last_synced: Option<DateTime<Utc>>,
}

/// History store backed by memory
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    state: RwLock<HistoryState>,
}

impl InMemoryHistoryStore {
    /// Create an empty history store
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visit to `url`
    pub async fn record_visit(&self, url: impl Into<String>) {
        let visit = HistoryVisit {
            url: url.into(),
            visited_at: Utc::now(),
            synced: false,
        };
        debug!(url = %visit.url, "Recorded visit");
        self.state.write().await.visits.push(visit);
    }

    /// For each of `urls`, whether it was ever visited
    pub async fn get_visited(&self, urls: &[&str]) -> Vec<bool> {
        let state = self.state.read().await;
        let visited: HashSet<&str> = state.visits.iter().map(|v| v.url.as_str()).collect();
        urls.iter().map(|url| visited.contains(url)).collect()
    }

    /// Distinct visited URLs, in order of first visit
    pub async fn visited(&self) -> Vec<String> {
        let state = self.state.read().await;
        let mut seen = HashSet::new();
        state
            .visits
            .iter()
            .filter(|v| seen.insert(v.url.as_str()))
            .map(|v| v.url.clone())
            .collect()
    }

    /// Visits not yet uploaded
    pub async fn pending_count(&self) -> usize {
        self.state
            .read()
            .await
            .visits
            .iter()
            .filter(|v| !v.synced)
            .count()
    }

    /// Visits already uploaded
    pub async fn synced_count(&self) -> usize {
        self.state
            .read()
            .await
            .visits
            .iter()
            .filter(|v| v.synced)
            .count()
    }

    /// Time of the last successful sync
    pub async fn last_synced(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.last_synced
    }
}

#[async_trait]
impl SyncableStore<SyncAuthInfo> for InMemoryHistoryStore {
    async fn sync(&self, auth: &SyncAuthInfo) -> Result<()> {
        if auth.token.trim().is_empty() {
            return Err(Error::authentication("history sync requires a token"));
        }

        let mut state = self.state.write().await;
        let mut uploaded = 0usize;
        for visit in state.visits.iter_mut().filter(|v| !v.synced) {
            visit.synced = true;
            uploaded += 1;
        }
        state.last_synced = Some(Utc::now());

        info!(uploaded, "History synchronized");
        Ok(())
    }
}
