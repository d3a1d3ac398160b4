//! Sync coordinator behavior tests

use crate::support::{
    RecordingObserver, StubStore, TestAccount, Token, coordinator, entries, new_log,
    token_reifier,
};
use std::sync::Arc;
use std::time::Duration;
use syncgate_application::SyncCoordinator;
use syncgate_domain::ports::SharedSyncableStore;
use syncgate_domain::{Error, FailureKind, StoreSyncStatus, SyncFailure};

#[tokio::test]
async fn test_every_store_gets_an_entry() {
    let history = StubStore::ok();
    let bookmarks = StubStore::ok();
    let logins = StubStore::ok();
    let coordinator = coordinator(vec![
        ("history", history.clone()),
        ("bookmarks", bookmarks.clone()),
        ("logins", logins.clone()),
    ]);

    let outcome = coordinator.try_sync(&TestAccount::signed_in("tok")).await;

    assert_eq!(outcome.len(), 3);
    assert!(outcome.is_success());
    let names: Vec<&str> = outcome.store_names().collect();
    assert_eq!(names, vec!["history", "bookmarks", "logins"]);
    for store in [&history, &bookmarks, &logins] {
        assert_eq!(store.call_count(), 1);
        assert_eq!(*store.seen_tokens.lock().unwrap(), vec!["tok".to_string()]);
    }
}

#[tokio::test]
async fn test_history_ok_bookmarks_network_failure() {
    let coordinator = coordinator(vec![
        ("history", StubStore::ok()),
        ("bookmarks", StubStore::failing("network")),
    ]);

    let outcome = coordinator.try_sync(&TestAccount::signed_in("tok")).await;

    assert_eq!(outcome.get("history"), Some(&StoreSyncStatus::Ok));
    assert_eq!(
        outcome.get("bookmarks"),
        Some(&StoreSyncStatus::Error(SyncFailure::store("network")))
    );
}

#[tokio::test]
async fn test_failure_does_not_short_circuit() {
    let first = StubStore::failing("disk full");
    let second = StubStore::ok();
    let coordinator = coordinator(vec![("a", first.clone()), ("b", second.clone())]);

    let outcome = coordinator.try_sync(&TestAccount::signed_in("tok")).await;

    assert_eq!(first.call_count(), 1);
    assert_eq!(second.call_count(), 1);
    assert!(outcome.get("a").is_some_and(|s| !s.is_ok()));
    assert_eq!(outcome.get("b"), Some(&StoreSyncStatus::Ok));
}

#[tokio::test]
async fn test_reification_failure_marks_every_store() {
    let history = StubStore::ok();
    let bookmarks = StubStore::ok();
    let coordinator = coordinator(vec![
        ("history", history.clone()),
        ("bookmarks", bookmarks.clone()),
    ]);

    let outcome = coordinator
        .try_sync(&TestAccount::signed_in("expired"))
        .await;

    assert_eq!(outcome.len(), 2);
    for (_, status) in outcome.iter() {
        let failure = status.failure().expect("auth failure");
        assert_eq!(failure.kind, FailureKind::Auth);
        assert_eq!(failure.message, "token expired");
    }
    assert_eq!(history.call_count(), 0);
    assert_eq!(bookmarks.call_count(), 0);
}

#[tokio::test]
async fn test_credential_provider_failure_is_auth_failure() {
    let history = StubStore::ok();
    let coordinator = coordinator(vec![("history", history.clone())]);

    let outcome = coordinator.try_sync(&TestAccount::signed_out()).await;

    assert_eq!(
        outcome.get("history"),
        Some(&StoreSyncStatus::Error(SyncFailure::auth(
            "account is signed out"
        )))
    );
    assert_eq!(history.call_count(), 0);
}

#[tokio::test]
async fn test_empty_coordinator_still_notifies() {
    let log = new_log();
    let coordinator = coordinator(vec![]);
    coordinator.register_observer(RecordingObserver::new("o", log.clone()));
    let account = TestAccount::signed_in("tok");

    let outcome = coordinator.try_sync(&account).await;

    assert!(outcome.is_empty());
    assert_eq!(entries(&log), vec!["o:started", "o:idle"]);
    // the credential is never requested when there is nothing to sync
    assert_eq!(
        account.requests.load(std::sync::atomic::Ordering::SeqCst),
        0
    );
}

#[tokio::test]
async fn test_lifecycle_symmetry_for_every_observer() {
    let log = new_log();
    let coordinator = coordinator(vec![("history", StubStore::failing("boom"))]);
    coordinator.register_observer(RecordingObserver::new("a", log.clone()));
    coordinator.register_observer(RecordingObserver::new("b", log.clone()));

    coordinator.try_sync(&TestAccount::signed_in("tok")).await;
    coordinator.try_sync(&TestAccount::signed_in("expired")).await;

    assert_eq!(
        entries(&log),
        vec![
            "a:started",
            "b:started",
            "a:idle",
            "b:idle",
            "a:started",
            "b:started",
            "a:idle",
            "b:idle",
        ]
    );
}

#[tokio::test]
async fn test_unregistered_observer_is_not_notified() {
    let log = new_log();
    let coordinator = coordinator(vec![("history", StubStore::ok())]);
    let id = coordinator.register_observer(RecordingObserver::new("o", log.clone()));
    assert!(coordinator.unregister_observer(id));

    coordinator.try_sync(&TestAccount::signed_in("tok")).await;

    assert!(entries(&log).is_empty());
    assert!(coordinator.observers().is_empty());
}

#[test]
fn test_duplicate_store_names_are_rejected() {
    let store: SharedSyncableStore<Token> = StubStore::ok();
    let stores = vec![
        ("history".to_string(), store.clone()),
        ("history".to_string(), store),
    ];

    let result = SyncCoordinator::new(stores, token_reifier());

    match result {
        Err(Error::InvalidArgument { message }) => assert!(message.contains("history")),
        other => panic!("Expected InvalidArgument error, got {other:?}"),
    }
}

#[test]
fn test_empty_store_name_is_rejected() {
    let store: SharedSyncableStore<Token> = StubStore::ok();
    let stores = vec![(" ".to_string(), store)];

    assert!(SyncCoordinator::new(stores, token_reifier()).is_err());
}

#[tokio::test]
async fn test_store_timeout_isolates_slow_store() {
    let slow = StubStore::slow(Duration::from_secs(5));
    let fast = StubStore::ok();
    let coordinator = coordinator(vec![("slow", slow.clone()), ("fast", fast.clone())])
        .with_store_timeout(Duration::from_millis(50));

    let outcome = coordinator.try_sync(&TestAccount::signed_in("tok")).await;

    let failure = outcome.get("slow").and_then(|s| s.failure()).unwrap();
    assert_eq!(failure.kind, FailureKind::Timeout);
    assert_eq!(outcome.get("fast"), Some(&StoreSyncStatus::Ok));
    assert_eq!(fast.call_count(), 1);
}

#[test]
fn test_store_names_and_timeout_accessors() {
    let coordinator = coordinator(vec![("history", StubStore::ok()), ("tabs", StubStore::ok())]);
    assert_eq!(
        coordinator.store_names().collect::<Vec<_>>(),
        vec!["history", "tabs"]
    );
    assert!(coordinator.store_timeout().is_none());
    assert!(!coordinator.is_sync_running());

    let coordinator = coordinator.with_store_timeout(Duration::from_secs(3));
    assert_eq!(coordinator.store_timeout(), Some(Duration::from_secs(3)));
}

#[test]
fn test_coordinator_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SyncCoordinator<Token>>();
    let _shared: Arc<SyncCoordinator<Token>> = Arc::new(coordinator(vec![]));
}
