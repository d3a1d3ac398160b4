//! Sync status tracker
//!
//! Observer that remembers when the account last synced and whether the
//! last attempt failed, which is what a settings screen shows next to a
//! "Sync now" button.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};
use syncgate_domain::error::Error;
use syncgate_domain::ports::SyncStatusObserver;

/// Whether a sync is in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncState {
    /// No sync is running
    #[default]
    Idle,
    /// A sync is running
    Syncing,
}

/// What to tell the user about the last sync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LastSyncSummary {
    /// Never tried to sync
    NeverSynced,
    /// The last attempt failed and no sync ever succeeded
    FailedNeverSynced,
    /// The last attempt succeeded
    Synced {
        /// When it finished
        at: DateTime<Utc>,
    },
    /// The last attempt failed after an earlier success
    Failed {
        /// When the last successful sync finished
        last_synced: DateTime<Utc>,
    },
}

#[derive(Debug, Default)]
struct TrackerState {
    state: SyncState,
    last_started: Option<DateTime<Utc>>,
    last_success: Option<DateTime<Utc>>,
    success_before_attempt: Option<DateTime<Utc>>,
    failed: bool,
    last_failed: Option<DateTime<Utc>>,
    last_error: Option<String>,
}

/// Observer recording sync state and timestamps
///
/// `on_error` arriving after `on_idle` turns the attempt that just finished
/// into a failure.
#[derive(Debug, Default)]
pub struct SyncStatusTracker {
    inner: RwLock<TrackerState>,
}

impl SyncStatusTracker {
    /// Create a tracker that has seen no syncs
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker that knows about an earlier successful sync
    pub fn with_last_synced(last_synced: DateTime<Utc>) -> Self {
        Self {
            inner: RwLock::new(TrackerState {
                last_success: Some(last_synced),
                ..TrackerState::default()
            }),
        }
    }

    /// Current state
    pub fn state(&self) -> SyncState {
        self.read(|s| s.state)
    }

    /// When the last attempt started
    pub fn last_started(&self) -> Option<DateTime<Utc>> {
        self.read(|s| s.last_started)
    }

    /// When the last successful sync finished
    pub fn last_synced(&self) -> Option<DateTime<Utc>> {
        self.read(|s| s.last_success)
    }

    /// When the last error was reported
    pub fn last_failed(&self) -> Option<DateTime<Utc>> {
        self.read(|s| s.last_failed)
    }

    /// Message of the last reported error
    pub fn last_error(&self) -> Option<String> {
        self.read(|s| s.last_error.clone())
    }

    /// Summary of the last attempt
    pub fn summary(&self) -> LastSyncSummary {
        self.read(|s| match (s.failed, s.last_success) {
            (false, None) => LastSyncSummary::NeverSynced,
            (true, None) => LastSyncSummary::FailedNeverSynced,
            (false, Some(at)) => LastSyncSummary::Synced { at },
            (true, Some(last_synced)) => LastSyncSummary::Failed { last_synced },
        })
    }

    fn read<T>(&self, f: impl FnOnce(&TrackerState) -> T) -> T {
        f(&self.inner.read().unwrap_or_else(PoisonError::into_inner))
    }

    fn write(&self, f: impl FnOnce(&mut TrackerState)) {
        f(&mut self.inner.write().unwrap_or_else(PoisonError::into_inner));
    }
}

impl SyncStatusObserver for SyncStatusTracker {
    fn on_started(&self) {
        self.write(|s| {
            s.state = SyncState::Syncing;
            s.last_started = Some(Utc::now());
            s.success_before_attempt = s.last_success;
            s.failed = false;
        });
    }

    fn on_idle(&self) {
        self.write(|s| {
            s.state = SyncState::Idle;
            s.last_success = Some(Utc::now());
        });
    }

    fn on_error(&self, error: Option<&Error>) {
        self.write(|s| {
            s.failed = true;
            s.last_failed = Some(Utc::now());
            s.last_success = s.success_before_attempt;
            s.last_error = error.map(ToString::to_string);
        });
    }
}
