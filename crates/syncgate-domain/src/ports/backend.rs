//! Store Backend Initializer Port
//!
//! Some store families sit on top of a native storage backend that must be
//! initialized once before any store is constructed. Callers that have such
//! a backend pass an initializer at bootstrap; callers that don't pass
//! nothing.

use crate::error::Result;

/// One-shot initialization of the storage backend shared by the stores
pub trait StoreBackendInitializer: Send + Sync {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Initialize the backend
    fn initialize(&self) -> Result<()>;
}
