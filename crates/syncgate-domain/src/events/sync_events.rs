//! Sync lifecycle events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle events of a sync coordinator
///
/// These mirror the [`SyncStatusObserver`](crate::ports::SyncStatusObserver)
/// callbacks as data, so they can be broadcast or serialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncEvent {
    /// A sync attempt started
    Started {
        /// When the attempt started
        at: DateTime<Utc>,
    },
    /// A sync attempt finished and the coordinator is idle again
    Idle {
        /// When the attempt finished
        at: DateTime<Utc>,
    },
    /// A collaborator reported a sync error
    Failed {
        /// When the error was reported
        at: DateTime<Utc>,
        /// Error description, if one was supplied
        message: Option<String>,
    },
}

impl SyncEvent {
    /// Started event stamped now
    pub fn started() -> Self {
        Self::Started { at: Utc::now() }
    }

    /// Idle event stamped now
    pub fn idle() -> Self {
        Self::Idle { at: Utc::now() }
    }

    /// Failed event stamped now
    pub fn failed(message: Option<String>) -> Self {
        Self::Failed {
            at: Utc::now(),
            message,
        }
    }

    /// Event timestamp
    pub fn at(&self) -> DateTime<Utc> {
        match self {
            Self::Started { at } | Self::Idle { at } | Self::Failed { at, .. } => *at,
        }
    }
}
