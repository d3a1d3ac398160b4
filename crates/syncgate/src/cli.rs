//! One-shot sync driver used by the `syncgate` binary

use chrono::{DateTime, Local, Utc};
use std::path::Path;
use std::sync::Arc;
use syncgate_domain::error::{Error, Result};
use syncgate_domain::value_objects::{StoreSyncStatus, SyncOutcome};
use syncgate_infrastructure::{ConfigLoader, init_logging, init_sync};
use syncgate_providers::observers::{LastSyncSummary, SyncStatusTracker};

/// Load configuration, run one sync and print the outcome
///
/// Returns whether every store synchronized successfully.
pub async fn run(config_path: Option<&Path>, json: bool) -> Result<bool> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let service = init_sync(&config)?;
    let tracker = Arc::new(SyncStatusTracker::new());
    service.coordinator().register_observer(tracker.clone());

    let outcome = service.sync().await;

    let output = if json {
        render_json(&outcome)?
    } else {
        let mut text = render_text(&outcome);
        text.push_str(&describe_summary(&tracker.summary()));
        text
    };
    println!("{output}");

    Ok(outcome.is_success())
}

/// Outcome as a JSON object keyed by store name
pub fn render_json(outcome: &SyncOutcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).map_err(Error::from)
}

/// Outcome as one `name: status` line per store
pub fn render_text(outcome: &SyncOutcome) -> String {
    let mut text = String::new();
    if outcome.is_empty() {
        text.push_str("No stores configured\n");
    }
    for (name, status) in outcome.iter() {
        let line = match status {
            StoreSyncStatus::Ok => format!("{name}: ok\n"),
            StoreSyncStatus::Error(failure) => format!("{name}: {failure}\n"),
        };
        text.push_str(&line);
    }
    text
}

/// Human readable last-synced line
pub fn describe_summary(summary: &LastSyncSummary) -> String {
    match summary {
        LastSyncSummary::NeverSynced => "Never synced".to_string(),
        LastSyncSummary::FailedNeverSynced => "Sync failed. Never synced".to_string(),
        LastSyncSummary::Synced { at } => format!("Last synced: {}", local_time(at)),
        LastSyncSummary::Failed { last_synced } => {
            format!("Sync failed. Last synced: {}", local_time(last_synced))
        }
    }
}

fn local_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
