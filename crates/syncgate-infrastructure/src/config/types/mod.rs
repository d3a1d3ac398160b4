//! Configuration types module

pub mod account;
pub mod app;
pub mod logging;
pub mod sync;

// Re-export main types
pub use app::*;
