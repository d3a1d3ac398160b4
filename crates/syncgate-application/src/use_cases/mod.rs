//! Use Cases

/// Account sync service
pub mod sync_service;

pub use sync_service::{SyncService, summarize_failures};
