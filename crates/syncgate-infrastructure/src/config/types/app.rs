//! Main application configuration

use serde::{Deserialize, Serialize};

pub use super::account::AccountConfig;
pub use super::logging::LoggingConfig;
pub use super::sync::SyncConfig;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Sync configuration
    pub sync: SyncConfig,

    /// Account configuration
    pub account: AccountConfig,
}
