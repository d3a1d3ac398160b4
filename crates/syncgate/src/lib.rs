//! # SyncGate
//!
//! Runs data synchronization over a fixed, named set of independently
//! syncable stores that share one account credential. At most one sync
//! runs at a time; observers are told when a sync starts and goes idle,
//! and every attempt yields a per-store outcome.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use syncgate::application::{SyncCoordinator, SyncService};
//! use syncgate::providers::credentials::{StaticCredentialProvider, TokenReifier};
//!
//! let coordinator = SyncCoordinator::new(stores, Arc::new(TokenReifier::new()))?;
//! let service = SyncService::new(Arc::new(coordinator), Arc::new(account));
//! let outcome = service.sync().await;
//! for (store, status) in outcome.iter() {
//!     println!("{store}: {status:?}");
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - errors, outcome types, events and port traits
//! - `application` - the sync coordinator and the sync service
//! - `providers` - stores, credential sources and observers
//! - `infrastructure` - configuration, logging and bootstrap

/// Domain layer - errors, value objects and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use syncgate_domain::*;
}

/// Application layer - coordinator and use cases
pub mod application {
    pub use syncgate_application::*;
}

/// Provider implementations
pub mod providers {
    pub use syncgate_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
pub mod infrastructure {
    pub use syncgate_infrastructure::*;
}

/// Command-line driver
pub mod cli;

pub use syncgate_application::{SyncCoordinator, SyncService};
pub use syncgate_domain::{Error, Result, StoreSyncStatus, SyncOutcome};
