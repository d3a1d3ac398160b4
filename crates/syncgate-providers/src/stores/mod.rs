//! Syncable Store Implementations
//!
//! | Store | Description |
//! |-------|-------------|
//! | [`NullSyncableStore`] | Always succeeds, syncs nothing |
//! | [`InMemoryHistoryStore`] | Browsing history kept in memory |

#[cfg(feature = "store-history")]
pub mod history;
pub mod null;

#[cfg(feature = "store-history")]
pub use history::{HistoryVisit, InMemoryHistoryStore};
pub use null::NullSyncableStore;
