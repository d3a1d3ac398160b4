//! Sync Status Observer Implementations
//!
//! | Observer | Description |
//! |----------|-------------|
//! | [`LoggingSyncObserver`] | Logs lifecycle notifications |
//! | [`BroadcastSyncObserver`] | Publishes [`SyncEvent`](syncgate_domain::SyncEvent)s on a tokio broadcast channel |
//! | [`SyncStatusTracker`] | Remembers state and last-synced time |

#[cfg(feature = "observer-broadcast")]
pub mod broadcast;
pub mod logging;
pub mod tracker;

#[cfg(feature = "observer-broadcast")]
pub use broadcast::BroadcastSyncObserver;
pub use logging::LoggingSyncObserver;
pub use tracker::{LastSyncSummary, SyncState, SyncStatusTracker};
