//! Account configuration types

use crate::constants::DEFAULT_TOKEN_SERVER_URL;
use serde::{Deserialize, Serialize};
use syncgate_domain::value_objects::AccountCredential;

/// Signed-in account used by the command-line driver
///
/// An empty `access_token` means no account is signed in.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountConfig {
    /// Key identifier
    pub key_id: String,

    /// OAuth access token
    pub access_token: String,

    /// Sync key
    pub sync_key: String,

    /// Token server URL
    pub token_server_url: String,
}

impl AccountConfig {
    /// Whether an account is configured
    pub fn is_signed_in(&self) -> bool {
        !self.access_token.trim().is_empty()
    }

    /// The account credential, if an account is configured
    pub fn credential(&self) -> Option<AccountCredential> {
        self.is_signed_in().then(|| {
            AccountCredential::new(
                self.key_id.clone(),
                self.access_token.clone(),
                self.sync_key.clone(),
                self.token_server_url.clone(),
            )
        })
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            access_token: String::new(),
            sync_key: String::new(),
            token_server_url: DEFAULT_TOKEN_SERVER_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("key_id", &self.key_id)
            .field("signed_in", &self.is_signed_in())
            .field("token_server_url", &self.token_server_url)
            .finish_non_exhaustive()
    }
}
