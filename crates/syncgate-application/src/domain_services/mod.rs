//! Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`SyncCoordinator`] | Gate that runs one sync at a time over named stores |
//! | [`ObserverRegistry`] | Per-coordinator lifecycle observers |

/// Sync coordinator
pub mod coordinator;
/// Observer registry
pub mod observer_registry;

pub use coordinator::SyncCoordinator;
pub use observer_registry::{ObserverId, ObserverRegistry};
