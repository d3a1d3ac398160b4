//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Store names are defined in `syncgate_domain::constants`.

use syncgate_domain::constants::{BOOKMARKS_STORE, HISTORY_STORE};

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "syncgate.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "syncgate";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SYNCGATE";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "SYNCGATE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum number of daily log files to keep
pub const LOG_MAX_FILES: usize = 5;

// ============================================================================
// SYNC CONSTANTS
// ============================================================================

/// Stores synced when the configuration names none
pub const DEFAULT_SYNC_STORES: &[&str] = &[HISTORY_STORE, BOOKMARKS_STORE];

/// Default token server
pub const DEFAULT_TOKEN_SERVER_URL: &str = "https://token.services.mozilla.com/";
