//! Credential Ports
//!
//! The shared account credential is produced on demand by an
//! [`AccountCredentialProvider`] and converted into the store family's
//! credential type by a [`CredentialReifier`].

use crate::error::Result;
use crate::value_objects::AccountCredential;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;

/// Source of the shared account credential
#[async_trait]
pub trait AccountCredentialProvider: Send + Sync {
    /// Produce the current account credential
    ///
    /// Fails with [`Error::Authentication`](crate::Error::Authentication)
    /// when the account is not signed in or the token cannot be refreshed.
    async fn account_credential(&self) -> Result<AccountCredential>;
}

/// Converts a generic account credential into credential type `A`
#[async_trait]
pub trait CredentialReifier<A>: Send + Sync {
    /// Reify the account credential
    async fn reify(&self, account: &AccountCredential) -> Result<A>;
}

/// [`CredentialReifier`] backed by an async closure
pub struct FnReifier<F> {
    reify: F,
}

impl<F> FnReifier<F> {
    /// Wrap a closure
    pub fn new(reify: F) -> Self {
        Self { reify }
    }
}

#[async_trait]
impl<A, F, Fut> CredentialReifier<A> for FnReifier<F>
where
    A: Send + 'static,
    F: Fn(AccountCredential) -> Fut + Send + Sync,
    Fut: Future<Output = Result<A>> + Send + 'static,
{
    async fn reify(&self, account: &AccountCredential) -> Result<A> {
        (self.reify)(account.clone()).await
    }
}

/// Shared account credential provider
pub type SharedAccountCredentialProvider = Arc<dyn AccountCredentialProvider>;
