//! Sync Service Use Case
//!
//! Application service that runs the coordinator for the signed-in account
//! and decides which outcomes are worth reporting to observers as errors.

use crate::domain_services::SyncCoordinator;
use std::sync::Arc;
use syncgate_domain::error::Error;
use syncgate_domain::ports::SharedAccountCredentialProvider;
use syncgate_domain::value_objects::{FailureKind, SyncOutcome};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Runs syncs for one account and reports failures to observers
pub struct SyncService<A> {
    coordinator: Arc<SyncCoordinator<A>>,
    account: SharedAccountCredentialProvider,
}

impl<A> Clone for SyncService<A> {
    fn clone(&self) -> Self {
        Self {
            coordinator: self.coordinator.clone(),
            account: self.account.clone(),
        }
    }
}

impl<A> SyncService<A>
where
    A: Send + Sync + 'static,
{
    /// Create a sync service
    pub fn new(
        coordinator: Arc<SyncCoordinator<A>>,
        account: SharedAccountCredentialProvider,
    ) -> Self {
        Self {
            coordinator,
            account,
        }
    }

    /// The underlying coordinator
    pub fn coordinator(&self) -> &Arc<SyncCoordinator<A>> {
        &self.coordinator
    }

    /// Whether a sync is currently running
    pub fn is_sync_running(&self) -> bool {
        self.coordinator.is_sync_running()
    }

    /// Sync all stores and wait for the outcome
    ///
    /// When any store failed, every observer receives `on_error` after
    /// `on_idle` and before the next attempt starts.
    pub async fn sync(&self) -> SyncOutcome {
        self.coordinator
            .try_sync_then(self.account.as_ref(), |outcome, observers| {
                match summarize_failures(outcome) {
                    Some(error) => {
                        warn!(error = %error, "Sync finished with failures");
                        observers.notify(|o| o.on_error(Some(&error)));
                    }
                    None => info!(stores = outcome.len(), "Sync finished"),
                }
            })
            .await
    }

    /// Start a sync in the background
    ///
    /// The sync queues behind any running one and is not cancelled when the
    /// handle is dropped.
    pub fn sync_now(&self) -> JoinHandle<SyncOutcome> {
        let service = self.clone();
        tokio::spawn(async move { service.sync().await })
    }
}

/// Collapse the failures of an outcome into one reportable error
pub fn summarize_failures(outcome: &SyncOutcome) -> Option<Error> {
    let failures: Vec<_> = outcome.failures().collect();
    let (_, first) = failures.first()?;

    if failures.iter().all(|(_, f)| f.kind == FailureKind::Auth) {
        return Some(Error::authentication(first.message.clone()));
    }

    let stores = failures
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    let message = failures
        .iter()
        .map(|(name, f)| format!("{name}: {}", f.message))
        .collect::<Vec<_>>()
        .join("; ");
    Some(Error::store_sync(stores, message))
}
