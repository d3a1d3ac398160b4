//! # SyncGate - Provider Implementations
//!
//! Concrete implementations of the ports defined in `syncgate-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Stores | `SyncableStore` | Null, InMemoryHistory |
//! | Credentials | `AccountCredentialProvider`, `CredentialReifier` | Static, Token |
//! | Observers | `SyncStatusObserver` | Logging, Broadcast, StatusTracker |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! syncgate-providers = { version = "0.1", default-features = false, features = ["store-history"] }
//! ```

// Re-export syncgate-domain types commonly used with providers
pub use syncgate_domain::error::{Error, Result};
pub use syncgate_domain::ports::{
    AccountCredentialProvider, CredentialReifier, SyncStatusObserver, SyncableStore,
};

/// Account credential sources and reifiers
pub mod credentials;

/// Sync status observers
pub mod observers;

/// Syncable store implementations
pub mod stores;
