//! Null syncable store
//!
//! A store that has nothing to synchronize. Useful for testing and for
//! configured store names without a concrete backend.

use async_trait::async_trait;
use syncgate_domain::error::Result;
use syncgate_domain::ports::SyncableStore;
use tracing::debug;

/// Store that always syncs successfully without doing anything
///
/// # Example
///
/// ```rust
/// use syncgate_providers::stores::NullSyncableStore;
///
/// let store = NullSyncableStore::new("tabs");
/// assert_eq!(store.name(), "tabs");
/// ```
#[derive(Debug, Clone)]
pub struct NullSyncableStore {
    name: String,
}

impl NullSyncableStore {
    /// Create a null store
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Store name used in logs
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[async_trait]
impl<A> SyncableStore<A> for NullSyncableStore
where
    A: Send + Sync,
{
    async fn sync(&self, _auth: &A) -> Result<()> {
        debug!(store = %self.name, "Null store has nothing to sync");
        Ok(())
    }
}
