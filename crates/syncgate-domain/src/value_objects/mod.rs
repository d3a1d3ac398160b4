//! Value Objects
//!
//! Immutable data carried between the coordinator, its stores and its
//! callers.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`AccountCredential`] | Shared account credential |
//! | [`SyncOutcome`] | Per-store results of one sync attempt |
//! | [`StoreSyncStatus`] | `Ok` or `Error(cause)` for one store |
//! | [`SyncFailure`] | Classified cause of a store failure |

/// Account credential
pub mod credential;
/// Sync outcome types
pub mod outcome;

pub use credential::AccountCredential;
pub use outcome::{FailureKind, StoreSyncStatus, SyncFailure, SyncOutcome};
