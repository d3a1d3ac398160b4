//! Logging sync observer

use syncgate_domain::error::Error;
use syncgate_domain::ports::SyncStatusObserver;
use tracing::{info, warn};

/// Observer that writes every lifecycle notification to the log
#[derive(Debug, Clone)]
pub struct LoggingSyncObserver {
    label: String,
}

impl LoggingSyncObserver {
    /// Create an observer whose log lines carry `label`
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for LoggingSyncObserver {
    fn default() -> Self {
        Self::new("sync")
    }
}

impl SyncStatusObserver for LoggingSyncObserver {
    fn on_started(&self) {
        info!(observer = %self.label, "Sync started");
    }

    fn on_idle(&self) {
        info!(observer = %self.label, "Sync idle");
    }

    fn on_error(&self, error: Option<&Error>) {
        match error {
            Some(error) => warn!(observer = %self.label, error = %error, "Sync error"),
            None => warn!(observer = %self.label, "Sync error"),
        }
    }
}
