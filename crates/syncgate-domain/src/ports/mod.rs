//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the coordinator and the
//! capabilities it consumes. Implementations live in `syncgate-providers`
//! or in the embedding application.
//!
//! ## Organization
//!
//! - **store** - [`SyncableStore`], the per-domain sync capability
//! - **credential** - account credential source and reification
//! - **observer** - lifecycle notifications
//! - **backend** - optional native backend initialization

/// Optional storage backend initialization
pub mod backend;
/// Credential provider and reifier ports
pub mod credential;
/// Sync status observer port
pub mod observer;
/// Syncable store port
pub mod store;

pub use backend::StoreBackendInitializer;
pub use credential::{
    AccountCredentialProvider, CredentialReifier, FnReifier, SharedAccountCredentialProvider,
};
pub use observer::{SharedSyncStatusObserver, SyncStatusObserver};
pub use store::{SharedSyncableStore, SyncableStore};
