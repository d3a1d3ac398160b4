//! Unit tests for the account credential and reifier adapter

use syncgate_domain::ports::{CredentialReifier, FnReifier};
use syncgate_domain::{AccountCredential, Error};

fn credential(token: &str) -> AccountCredential {
    AccountCredential::new("kid-1", token, "secret-key", "https://token.example.com")
}

#[test]
fn test_debug_redacts_secrets() {
    let debug = format!("{:?}", credential("super-secret-token"));
    assert!(debug.contains("kid-1"));
    assert!(debug.contains("https://token.example.com"));
    assert!(!debug.contains("super-secret-token"));
    assert!(!debug.contains("secret-key"));
}

#[test]
fn test_has_access_token() {
    assert!(credential("abc").has_access_token());
    assert!(!credential("").has_access_token());
    assert!(!credential("   ").has_access_token());
}

#[tokio::test]
async fn test_fn_reifier_maps_credential() {
    let reifier = FnReifier::new(|account: AccountCredential| async move {
        Ok(format!("{}:{}", account.key_id, account.access_token))
    });

    let reified: String = reifier.reify(&credential("tok")).await.unwrap();
    assert_eq!(reified, "kid-1:tok");
}

#[tokio::test]
async fn test_fn_reifier_propagates_failure() {
    let reifier = FnReifier::new(|_account: AccountCredential| async move {
        Err::<String, _>(Error::authentication("no token"))
    });

    let result = reifier.reify(&credential("tok")).await;
    assert!(result.unwrap_err().is_auth());
}
