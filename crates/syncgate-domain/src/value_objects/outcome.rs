//! Sync outcome value objects
//!
//! A [`SyncOutcome`] is built once per sync attempt and maps every
//! configured store name to a [`StoreSyncStatus`], in store order.

use crate::error::Error;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Category of a store-level failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The shared credential could not be obtained or reified
    Auth,
    /// The store's own sync failed
    Store,
    /// The store did not finish within the configured timeout
    Timeout,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auth => "auth",
            Self::Store => "store",
            Self::Timeout => "timeout",
        };
        f.write_str(name)
    }
}

/// Cause recorded for a failed store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncFailure {
    /// Failure category
    pub kind: FailureKind,
    /// Human readable cause
    pub message: String,
}

impl SyncFailure {
    /// Authentication failure
    pub fn auth(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Auth,
            message: message.into(),
        }
    }

    /// Store failure
    pub fn store(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Store,
            message: message.into(),
        }
    }

    /// Timeout failure
    pub fn timeout(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Timeout,
            message: message.into(),
        }
    }

    /// Classify a domain error, keeping only its cause text
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Authentication { message, .. } => Self::auth(message.clone()),
            Error::Timeout { message } => Self::timeout(message.clone()),
            Error::StoreSync { message, .. } => Self::store(message.clone()),
            Error::String(message) => Self::store(message.clone()),
            other => Self::store(other.to_string()),
        }
    }
}

impl fmt::Display for SyncFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind, self.message)
    }
}

/// Result of synchronizing one store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "cause", rename_all = "snake_case")]
pub enum StoreSyncStatus {
    /// The store synchronized successfully
    Ok,
    /// The store failed
    Error(SyncFailure),
}

impl StoreSyncStatus {
    /// Whether the store synchronized successfully
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// The failure, if any
    pub fn failure(&self) -> Option<&SyncFailure> {
        match self {
            Self::Ok => None,
            Self::Error(failure) => Some(failure),
        }
    }
}

/// Aggregated per-store results of one sync attempt
///
/// Entries keep the insertion order of the coordinator's store mapping.
/// The outcome is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncOutcome {
    entries: Vec<(String, StoreSyncStatus)>,
}

impl SyncOutcome {
    /// An outcome with no stores
    pub fn empty() -> Self {
        Self::default()
    }

    /// Status of a store by name
    pub fn get(&self, store: &str) -> Option<&StoreSyncStatus> {
        self.entries
            .iter()
            .find(|(name, _)| name == store)
            .map(|(_, status)| status)
    }

    /// Iterate entries in store order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StoreSyncStatus)> {
        self.entries
            .iter()
            .map(|(name, status)| (name.as_str(), status))
    }

    /// Store names in order
    pub fn store_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of stores in the outcome
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no stores were synchronized
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when every store succeeded (vacuously true when empty)
    pub fn is_success(&self) -> bool {
        self.entries.iter().all(|(_, status)| status.is_ok())
    }

    /// Failed stores and their causes
    pub fn failures(&self) -> impl Iterator<Item = (&str, &SyncFailure)> {
        self.entries
            .iter()
            .filter_map(|(name, status)| status.failure().map(|f| (name.as_str(), f)))
    }
}

impl FromIterator<(String, StoreSyncStatus)> for SyncOutcome {
    fn from_iter<I: IntoIterator<Item = (String, StoreSyncStatus)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for SyncOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, status) in &self.entries {
            map.serialize_entry(name, status)?;
        }
        map.end()
    }
}
