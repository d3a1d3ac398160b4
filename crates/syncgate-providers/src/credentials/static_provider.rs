//! Static account credential provider

use async_trait::async_trait;
use syncgate_domain::error::{Error, Result};
use syncgate_domain::ports::AccountCredentialProvider;
use syncgate_domain::value_objects::AccountCredential;

/// Provider returning a fixed credential, or failing when signed out
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Option<AccountCredential>,
}

impl StaticCredentialProvider {
    /// Provider for a signed-in account
    pub fn new(credential: AccountCredential) -> Self {
        Self {
            credential: Some(credential),
        }
    }

    /// Provider for a signed-out account; every request fails
    pub fn unauthenticated() -> Self {
        Self { credential: None }
    }

    /// Whether a credential is available
    pub fn is_signed_in(&self) -> bool {
        self.credential.is_some()
    }
}

#[async_trait]
impl AccountCredentialProvider for StaticCredentialProvider {
    async fn account_credential(&self) -> Result<AccountCredential> {
        self.credential
            .clone()
            .ok_or_else(|| Error::authentication("No account is signed in"))
    }
}
