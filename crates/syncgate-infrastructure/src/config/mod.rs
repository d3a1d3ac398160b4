//! Configuration management
//!
//! Layered configuration: built-in defaults, then a TOML file, then
//! `SYNCGATE_`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader, validate_app_config};
pub use types::{AccountConfig, AppConfig, LoggingConfig, SyncConfig};
