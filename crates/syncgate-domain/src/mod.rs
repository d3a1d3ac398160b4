//! # Domain Layer
//!
//! Core types and port traits for SyncGate, a coordinator that synchronizes
//! a fixed set of named stores sharing one account credential, at most one
//! sync at a time.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Domain error type and `Result` alias |
//! | [`value_objects`] | Credentials, per-store status and the sync outcome |
//! | [`events`] | Serializable sync lifecycle events |
//! | [`ports`] | Store, credential, observer and backend contracts |
//! | [`constants`] | Well-known store names |

pub mod constants;
pub mod error;
pub mod events;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use events::SyncEvent;
pub use value_objects::{
    AccountCredential, FailureKind, StoreSyncStatus, SyncFailure, SyncOutcome,
};
