//! Sync configuration types

use crate::constants::DEFAULT_SYNC_STORES;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Sync configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Sync enabled
    ///
    /// A disabled configuration yields a coordinator without stores.
    pub enabled: bool,

    /// Names of the stores to sync, in sync order
    pub stores: Vec<String>,

    /// Per-store sync timeout in seconds; unset means no timeout
    ///
    /// Configure via `SYNCGATE_SYNC__STORE_TIMEOUT_SECS=30`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_timeout_secs: Option<u64>,
}

impl SyncConfig {
    /// Per-store timeout as a duration
    pub fn store_timeout(&self) -> Option<Duration> {
        self.store_timeout_secs.map(Duration::from_secs)
    }
}

/// Returns default sync configuration with:
/// - Sync enabled
/// - The history and bookmarks stores
/// - No per-store timeout
impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stores: DEFAULT_SYNC_STORES.iter().map(ToString::to_string).collect(),
            store_timeout_secs: None,
        }
    }
}
