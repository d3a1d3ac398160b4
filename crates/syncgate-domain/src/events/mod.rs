//! Domain Events
//!
//! Domain events represent significant occurrences in the sync lifecycle.
//! Events are immutable facts that other parts of the system can react to.
//!
//! | Event | Description |
//! |-------|-------------|
//! | [`SyncEvent`] | Started / idle / failed notifications |

/// Sync lifecycle event definitions
pub mod sync_events;

pub use sync_events::SyncEvent;
