//! Sync Bootstrap
//!
//! Composition root that turns a [`SyncConfig`] into a ready
//! [`SyncCoordinator`].
//!
//! ```text
//! SyncConfig.stores → StoreFactory catalog → SyncCoordinator ← CredentialReifier
//!                           ↑
//!             StoreBackendInitializer (once, optional)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let service = init_sync(&config)?;
//! let outcome = service.sync().await;
//! ```

use crate::config::{AppConfig, SyncConfig};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use syncgate_application::{SyncCoordinator, SyncService};
use syncgate_domain::constants::HISTORY_STORE;
use syncgate_domain::error::{Error, Result};
use syncgate_domain::ports::{CredentialReifier, SharedSyncableStore, StoreBackendInitializer};
use syncgate_providers::credentials::{StaticCredentialProvider, SyncAuthInfo, TokenReifier};
use syncgate_providers::observers::LoggingSyncObserver;
use syncgate_providers::stores::{InMemoryHistoryStore, NullSyncableStore};
use tracing::{debug, info};

/// Creates the store registered under a configured name
pub type StoreFactory<A> = Box<dyn Fn(&str) -> Result<SharedSyncableStore<A>> + Send + Sync>;

/// Builds coordinators from configuration
///
/// Configured store names are looked up in a catalog of factories. Names
/// without a factory use the fallback, or fail when there is none.
pub struct SyncBootstrap<A> {
    factories: Vec<(String, StoreFactory<A>)>,
    fallback: Option<StoreFactory<A>>,
    backend: Option<Box<dyn StoreBackendInitializer>>,
    backend_ready: AtomicBool,
}

impl<A> SyncBootstrap<A>
where
    A: Send + Sync + 'static,
{
    /// Create a bootstrap with an empty catalog
    pub fn new() -> Self {
        Self {
            factories: Vec::new(),
            fallback: None,
            backend: None,
            backend_ready: AtomicBool::new(false),
        }
    }

    /// Register the factory for store `name`, replacing any earlier one
    #[must_use]
    pub fn register_store<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(&str) -> Result<SharedSyncableStore<A>> + Send + Sync + 'static,
    {
        let name = name.into();
        self.factories.retain(|(registered, _)| *registered != name);
        self.factories.push((name, Box::new(factory)));
        self
    }

    /// Factory used for configured names missing from the catalog
    #[must_use]
    pub fn with_fallback<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Result<SharedSyncableStore<A>> + Send + Sync + 'static,
    {
        self.fallback = Some(Box::new(factory));
        self
    }

    /// Storage backend to initialize before the first stores are created
    #[must_use]
    pub fn with_backend_initializer(mut self, backend: Box<dyn StoreBackendInitializer>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Names with a registered factory
    pub fn registered_stores(&self) -> impl Iterator<Item = &str> {
        self.factories.iter().map(|(name, _)| name.as_str())
    }

    /// Build a coordinator over the configured stores
    ///
    /// A disabled configuration yields a coordinator with no stores, and
    /// leaves the backend uninitialized.
    pub fn build(
        &self,
        config: &SyncConfig,
        reifier: Arc<dyn CredentialReifier<A>>,
    ) -> Result<SyncCoordinator<A>> {
        if !config.enabled {
            info!("Sync disabled, no stores configured");
            return SyncCoordinator::new(Vec::new(), reifier);
        }

        self.initialize_backend()?;

        let stores = config
            .stores
            .iter()
            .map(|name| self.create_store(name).map(|store| (name.clone(), store)))
            .collect::<Result<Vec<_>>>()?;

        let coordinator = SyncCoordinator::new(stores, reifier)?;
        let coordinator = match config.store_timeout() {
            Some(timeout) => coordinator.with_store_timeout(timeout),
            None => coordinator,
        };

        info!(
            stores = ?config.stores,
            timeout = ?config.store_timeout(),
            "Sync coordinator created"
        );
        Ok(coordinator)
    }

    fn create_store(&self, name: &str) -> Result<SharedSyncableStore<A>> {
        let factory = self
            .factories
            .iter()
            .find(|(registered, _)| registered == name)
            .map(|(_, factory)| factory)
            .or(self.fallback.as_ref())
            .ok_or_else(|| Error::configuration(format!("Unknown sync store: {name}")))?;

        debug!(store = name, "Creating store");
        factory(name)
    }

    fn initialize_backend(&self) -> Result<()> {
        let Some(backend) = &self.backend else {
            return Ok(());
        };
        if self.backend_ready.load(Ordering::Acquire) {
            return Ok(());
        }

        backend.initialize().map_err(|e| {
            Error::infrastructure_with_source(
                format!("Failed to initialize store backend '{}'", backend.name()),
                e,
            )
        })?;
        self.backend_ready.store(true, Ordering::Release);
        info!(backend = backend.name(), "Store backend initialized");
        Ok(())
    }
}

impl<A> Default for SyncBootstrap<A>
where
    A: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl SyncBootstrap<SyncAuthInfo> {
    /// Catalog with the built-in stores
    ///
    /// `history` is kept in memory; every other name gets a null store.
    pub fn with_default_stores() -> Self {
        Self::new()
            .register_store(HISTORY_STORE, |_| {
                Ok(Arc::new(InMemoryHistoryStore::new()) as SharedSyncableStore<SyncAuthInfo>)
            })
            .with_fallback(|name| {
                Ok(Arc::new(NullSyncableStore::new(name)) as SharedSyncableStore<SyncAuthInfo>)
            })
    }
}

impl<A> std::fmt::Debug for SyncBootstrap<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncBootstrap")
            .field(
                "stores",
                &self.factories.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            )
            .field("fallback", &self.fallback.is_some())
            .field("backend", &self.backend.as_ref().map(|b| b.name()))
            .finish()
    }
}

/// Build a sync service for the configured account and stores
///
/// Uses the built-in store catalog and token reification, and logs every
/// lifecycle notification.
pub fn init_sync(config: &AppConfig) -> Result<SyncService<SyncAuthInfo>> {
    let coordinator =
        SyncBootstrap::with_default_stores().build(&config.sync, Arc::new(TokenReifier::new()))?;
    coordinator.register_observer(Arc::new(LoggingSyncObserver::default()));

    let account = match config.account.credential() {
        Some(credential) => StaticCredentialProvider::new(credential),
        None => StaticCredentialProvider::unauthenticated(),
    };

    Ok(SyncService::new(Arc::new(coordinator), Arc::new(account)))
}
