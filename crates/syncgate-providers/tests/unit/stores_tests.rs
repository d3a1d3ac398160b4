//! Tests for store implementations

use syncgate_providers::SyncableStore;
use syncgate_providers::credentials::SyncAuthInfo;
use syncgate_providers::stores::NullSyncableStore;

fn auth(token: &str) -> SyncAuthInfo {
    SyncAuthInfo {
        token: token.to_string(),
    }
}

#[tokio::test]
async fn test_null_store_always_succeeds() {
    let store = NullSyncableStore::new("tabs");
    assert!(store.sync(&auth("")).await.is_ok());
    assert!(SyncableStore::<()>::sync(&store, &()).await.is_ok());
}

#[cfg(feature = "store-history")]
mod history {
    use super::auth;
    use syncgate_providers::SyncableStore;
    use syncgate_providers::stores::InMemoryHistoryStore;

    #[tokio::test]
    async fn test_get_visited() {
        let store = InMemoryHistoryStore::new();
        store.record_visit("https://www.mozilla.org").await;
        store.record_visit("https://example.com").await;
        store.record_visit("https://www.mozilla.org").await;

        let visited = store
            .get_visited(&["https://example.com", "https://unknown.org"])
            .await;
        assert_eq!(visited, vec![true, false]);
        assert_eq!(
            store.visited().await,
            vec!["https://www.mozilla.org", "https://example.com"]
        );
    }

    #[tokio::test]
    async fn test_sync_marks_pending_visits() {
        let store = InMemoryHistoryStore::new();
        store.record_visit("https://www.mozilla.org").await;
        store.record_visit("https://example.com").await;
        assert_eq!(store.pending_count().await, 2);
        assert!(store.last_synced().await.is_none());

        store.sync(&auth("token")).await.unwrap();

        assert_eq!(store.pending_count().await, 0);
        assert_eq!(store.synced_count().await, 2);
        assert!(store.last_synced().await.is_some());

        store.record_visit("https://rust-lang.org").await;
        assert_eq!(store.pending_count().await, 1);
    }

    #[tokio::test]
    async fn test_sync_without_token_fails() {
        let store = InMemoryHistoryStore::new();
        store.record_visit("https://www.mozilla.org").await;

        let err = store.sync(&auth("")).await.unwrap_err();
        assert!(err.is_auth());
        assert_eq!(store.pending_count().await, 1);
        assert!(store.last_synced().await.is_none());
    }
}
