//! Credential Providers
//!
//! | Type | Port |
//! |------|------|
//! | [`StaticCredentialProvider`] | `AccountCredentialProvider` |
//! | [`TokenReifier`] | `CredentialReifier<SyncAuthInfo>` |

pub mod static_provider;
pub mod token;

pub use static_provider::StaticCredentialProvider;
pub use token::{SyncAuthInfo, TokenReifier};
