//! Tests for credential providers and reifiers

use syncgate_domain::AccountCredential;
use syncgate_providers::credentials::{StaticCredentialProvider, SyncAuthInfo, TokenReifier};
use syncgate_providers::{AccountCredentialProvider, CredentialReifier};

fn credential(token: &str) -> AccountCredential {
    AccountCredential::new("kid", token, "key", "https://token.example.com")
}

#[tokio::test]
async fn test_static_provider_returns_credential() {
    let provider = StaticCredentialProvider::new(credential("abc"));
    assert!(provider.is_signed_in());

    let result = provider.account_credential().await.unwrap();
    assert_eq!(result.access_token, "abc");
}

#[tokio::test]
async fn test_unauthenticated_provider_fails_with_auth_error() {
    let provider = StaticCredentialProvider::unauthenticated();
    assert!(!provider.is_signed_in());

    let err = provider.account_credential().await.unwrap_err();
    assert!(err.is_auth());
}

#[tokio::test]
async fn test_token_reifier_uses_access_token() {
    let auth = TokenReifier::new().reify(&credential("abc")).await.unwrap();
    assert_eq!(
        auth,
        SyncAuthInfo {
            token: "abc".to_string()
        }
    );
}

#[tokio::test]
async fn test_token_reifier_rejects_blank_token() {
    let err = TokenReifier::new().reify(&credential("  ")).await.unwrap_err();
    assert!(err.is_auth());
    assert!(err.to_string().contains("no access token"));
}

#[test]
fn test_sync_auth_info_debug_is_redacted() {
    let auth = SyncAuthInfo {
        token: "secret".to_string(),
    };
    let debug = format!("{auth:?}");
    assert!(!debug.contains("secret"));
}
