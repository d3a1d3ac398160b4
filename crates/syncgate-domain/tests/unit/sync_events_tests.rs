//! Unit tests for sync lifecycle events

use syncgate_domain::SyncEvent;

#[test]
fn test_event_constructors() {
    assert!(matches!(SyncEvent::started(), SyncEvent::Started { .. }));
    assert!(matches!(SyncEvent::idle(), SyncEvent::Idle { .. }));
    match SyncEvent::failed(Some("network".to_string())) {
        SyncEvent::Failed { message, .. } => assert_eq!(message.as_deref(), Some("network")),
        _ => panic!("Expected Failed event"),
    }
}

#[test]
fn test_event_timestamps_are_monotonic() {
    let started = SyncEvent::started();
    let idle = SyncEvent::idle();
    assert!(idle.at() >= started.at());
}

#[test]
fn test_event_serialization_roundtrip() {
    let event = SyncEvent::failed(None);
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains(r#""type":"failed""#));

    let decoded: SyncEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, event);
}
