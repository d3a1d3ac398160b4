//! Account credential value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared account credential from which per-store credentials are reified
///
/// All syncable stores of one coordinator share a single account. Each
/// store family converts this into its own credential type through a
/// [`CredentialReifier`](crate::ports::CredentialReifier).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountCredential {
    /// Identifier of the key used to derive `sync_key`
    pub key_id: String,
    /// OAuth access token for the account
    pub access_token: String,
    /// Key material used to decrypt synced records
    pub sync_key: String,
    /// Token server the stores exchange the access token with
    pub token_server_url: String,
}

impl AccountCredential {
    /// Create a credential
    pub fn new(
        key_id: impl Into<String>,
        access_token: impl Into<String>,
        sync_key: impl Into<String>,
        token_server_url: impl Into<String>,
    ) -> Self {
        Self {
            key_id: key_id.into(),
            access_token: access_token.into(),
            sync_key: sync_key.into(),
            token_server_url: token_server_url.into(),
        }
    }

    /// Whether an access token is present
    pub fn has_access_token(&self) -> bool {
        !self.access_token.trim().is_empty()
    }
}

impl fmt::Debug for AccountCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountCredential")
            .field("key_id", &self.key_id)
            .field("access_token", &"<redacted>")
            .field("sync_key", &"<redacted>")
            .field("token_server_url", &self.token_server_url)
            .finish()
    }
}
