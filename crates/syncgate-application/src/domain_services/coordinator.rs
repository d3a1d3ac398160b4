//! Sync Coordinator
//!
//! Orchestrates synchronization of a fixed set of named stores that share
//! one account credential. A single gate guarantees that at most one sync
//! runs at any time; concurrent callers wait for the running sync to finish.
//!
//! ## Sync attempt
//!
//! 1. Acquire the gate
//! 2. Notify observers `on_started`
//! 3. With no stores, finish with an empty outcome
//! 4. Obtain and reify the account credential; on failure every store is
//!    recorded as an auth error and no store is synced
//! 5. Sync every store in insertion order, recording each result
//! 6. Notify observers `on_idle`, also when the attempt is cancelled
//! 7. Release the gate and return the outcome

use super::observer_registry::{ObserverId, ObserverRegistry};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use syncgate_domain::error::{Error, Result};
use syncgate_domain::ports::{
    AccountCredentialProvider, CredentialReifier, SharedSyncStatusObserver, SharedSyncableStore,
    SyncableStore,
};
use syncgate_domain::value_objects::{StoreSyncStatus, SyncFailure, SyncOutcome};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

/// Serializes sync attempts over a fixed set of stores
pub struct SyncCoordinator<A> {
    stores: Vec<(String, SharedSyncableStore<A>)>,
    reifier: Arc<dyn CredentialReifier<A>>,
    gate: Mutex<()>,
    observers: ObserverRegistry,
    store_timeout: Option<Duration>,
}

impl<A> SyncCoordinator<A>
where
    A: Send + Sync + 'static,
{
    /// Create a coordinator over `stores`, in the given order
    ///
    /// Store names must be non-empty and unique.
    pub fn new(
        stores: Vec<(String, SharedSyncableStore<A>)>,
        reifier: Arc<dyn CredentialReifier<A>>,
    ) -> Result<Self> {
        let mut seen = HashSet::with_capacity(stores.len());
        for (name, _) in &stores {
            if name.trim().is_empty() {
                return Err(Error::invalid_argument("Store name cannot be empty"));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::invalid_argument(format!(
                    "Duplicate store name: {name}"
                )));
            }
        }

        Ok(Self {
            stores,
            reifier,
            gate: Mutex::new(()),
            observers: ObserverRegistry::new(),
            store_timeout: None,
        })
    }

    /// Bound each store's sync by `timeout`
    ///
    /// A store that exceeds it is recorded as a timeout failure and the
    /// remaining stores still run.
    #[must_use]
    pub fn with_store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = Some(timeout);
        self
    }

    /// Configured per-store timeout
    pub fn store_timeout(&self) -> Option<Duration> {
        self.store_timeout
    }

    /// Configured store names, in sync order
    pub fn store_names(&self) -> impl Iterator<Item = &str> {
        self.stores.iter().map(|(name, _)| name.as_str())
    }

    /// Observers of this coordinator
    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    /// Register a sync status observer
    pub fn register_observer(&self, observer: SharedSyncStatusObserver) -> ObserverId {
        self.observers.register(observer)
    }

    /// Unregister a sync status observer
    pub fn unregister_observer(&self, id: ObserverId) -> bool {
        self.observers.unregister(id)
    }

    /// Whether a sync is currently running
    ///
    /// The answer may be stale by the time the caller acts on it.
    pub fn is_sync_running(&self) -> bool {
        self.gate.try_lock().is_err()
    }

    /// Sync every configured store
    ///
    /// Waits for any running sync to finish first. Never fails: store and
    /// credential failures are recorded in the returned outcome.
    pub async fn try_sync(&self, account: &dyn AccountCredentialProvider) -> SyncOutcome {
        self.try_sync_then(account, |_, _| {}).await
    }

    /// Sync every configured store, then run `after_idle` before releasing the gate
    ///
    /// `after_idle` sees the outcome and the observers after `on_idle` was
    /// delivered, so its notifications cannot interleave with the next
    /// attempt. If the returned future is dropped mid-attempt, observers
    /// still receive `on_idle` but `after_idle` does not run.
    pub async fn try_sync_then<F>(
        &self,
        account: &dyn AccountCredentialProvider,
        after_idle: F,
    ) -> SyncOutcome
    where
        F: FnOnce(&SyncOutcome, &ObserverRegistry),
    {
        let _gate = self.gate.lock().await;
        debug!(stores = self.stores.len(), "Sync gate acquired");

        self.observers.notify(|o| o.on_started());
        let idle = IdleNotifier {
            observers: &self.observers,
        };
        let outcome = self.sync_stores(account).await;
        drop(idle);

        debug!(
            stores = outcome.len(),
            success = outcome.is_success(),
            "Sync finished"
        );
        after_idle(&outcome, &self.observers);
        outcome
    }

    async fn sync_stores(&self, account: &dyn AccountCredentialProvider) -> SyncOutcome {
        if self.stores.is_empty() {
            info!("No syncable stores configured");
            return SyncOutcome::empty();
        }

        let auth = match self.reify(account).await {
            Ok(auth) => auth,
            Err(e) => {
                warn!(error = %e, "Failed to reify account credential, skipping all stores");
                let failure = auth_failure(&e);
                return self
                    .stores
                    .iter()
                    .map(|(name, _)| (name.clone(), StoreSyncStatus::Error(failure.clone())))
                    .collect();
            }
        };

        let mut results = Vec::with_capacity(self.stores.len());
        for (name, store) in &self.stores {
            let status = self.sync_store(name, store.as_ref(), &auth).await;
            results.push((name.clone(), status));
        }
        results.into_iter().collect()
    }

    async fn reify(&self, account: &dyn AccountCredentialProvider) -> Result<A> {
        let credential = account.account_credential().await?;
        self.reifier.reify(&credential).await
    }

    async fn sync_store(
        &self,
        name: &str,
        store: &dyn SyncableStore<A>,
        auth: &A,
    ) -> StoreSyncStatus {
        let result = match self.store_timeout {
            Some(limit) => tokio::time::timeout(limit, store.sync(auth))
                .await
                .unwrap_or_else(|_| {
                    Err(Error::timeout(format!(
                        "store '{name}' did not finish within {limit:?}"
                    )))
                }),
            None => store.sync(auth).await,
        };

        match result {
            Ok(()) => {
                info!(store = name, "Synchronized store");
                StoreSyncStatus::Ok
            }
            Err(e) => {
                error!(store = name, error = %e, "Error synchronizing store");
                StoreSyncStatus::Error(SyncFailure::from_error(&e))
            }
        }
    }
}

/// Delivers `on_idle` when dropped, including when the attempt is cancelled
struct IdleNotifier<'a> {
    observers: &'a ObserverRegistry,
}

impl Drop for IdleNotifier<'_> {
    fn drop(&mut self) {
        self.observers.notify(|o| o.on_idle());
    }
}

fn auth_failure(error: &Error) -> SyncFailure {
    match error {
        Error::Authentication { message, .. } => SyncFailure::auth(message.clone()),
        other => SyncFailure::auth(other.to_string()),
    }
}

impl<A> std::fmt::Debug for SyncCoordinator<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncCoordinator")
            .field(
                "stores",
                &self.stores.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .field("observers", &self.observers)
            .field("store_timeout", &self.store_timeout)
            .finish_non_exhaustive()
    }
}
