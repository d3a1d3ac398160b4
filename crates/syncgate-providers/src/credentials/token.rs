//! Token credential reification

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use syncgate_domain::error::{Error, Result};
use syncgate_domain::ports::CredentialReifier;
use syncgate_domain::value_objects::AccountCredential;

/// Credential type understood by token-based stores
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncAuthInfo {
    /// Bearer token presented to the sync server
    pub token: String,
}

impl std::fmt::Debug for SyncAuthInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncAuthInfo")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Reifies an account credential into a [`SyncAuthInfo`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenReifier;

impl TokenReifier {
    /// Create a token reifier
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CredentialReifier<SyncAuthInfo> for TokenReifier {
    async fn reify(&self, account: &AccountCredential) -> Result<SyncAuthInfo> {
        if !account.has_access_token() {
            return Err(Error::authentication("Account credential has no access token"));
        }
        Ok(SyncAuthInfo {
            token: account.access_token.clone(),
        })
    }
}
