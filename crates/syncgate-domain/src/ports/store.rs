//! Syncable Store Port
//!
//! Defines the contract every independently syncable data domain
//! (history, bookmarks, logins, ...) implements.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// A store that can synchronize itself with a remote using credential `A`
///
/// `A` is the store family's reified credential type. Stores with heavy
/// native dependencies can share one `A` without the coordinator knowing
/// their concrete types.
///
/// # Example
///
/// ```no_run
/// use async_trait::async_trait;
/// use syncgate_domain::ports::SyncableStore;
///
/// struct Bookmarks;
///
/// #[async_trait]
/// impl SyncableStore<String> for Bookmarks {
///     async fn sync(&self, _token: &String) -> syncgate_domain::Result<()> {
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait SyncableStore<A>: Send + Sync
where
    A: Send + Sync,
{
    /// Synchronize the store
    ///
    /// An `Err` is recorded in the outcome for this store only; the
    /// coordinator still syncs every other store.
    async fn sync(&self, auth: &A) -> Result<()>;
}

/// Shared syncable store
pub type SharedSyncableStore<A> = Arc<dyn SyncableStore<A>>;
