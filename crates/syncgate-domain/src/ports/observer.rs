//! Sync Status Observer Port

use crate::error::Error;
use std::sync::Arc;

/// Receives sync lifecycle notifications
///
/// Callbacks are invoked synchronously by the coordinator, in registration
/// order. Implementations should return quickly.
pub trait SyncStatusObserver: Send + Sync {
    /// Called at the start of a sync, before any store is synchronized
    fn on_started(&self);

    /// Called at the end of a sync, after every store has been attempted
    fn on_idle(&self);

    /// Called when a collaborator decides a sync error is worth reporting
    fn on_error(&self, error: Option<&Error>);
}

/// Shared sync status observer
pub type SharedSyncStatusObserver = Arc<dyn SyncStatusObserver>;
