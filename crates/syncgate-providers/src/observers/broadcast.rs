//! Broadcast Sync Observer
//!
//! Forwards lifecycle notifications as [`SyncEvent`]s over a tokio
//! broadcast channel, so any number of async consumers can follow sync
//! progress.
//!
//! ## Capacity
//!
//! When the channel is full, the oldest events are dropped and slow
//! receivers observe `RecvError::Lagged`.

use std::sync::Arc;
use syncgate_domain::error::Error;
use syncgate_domain::events::SyncEvent;
use syncgate_domain::ports::SyncStatusObserver;
use tokio::sync::broadcast;
use tracing::debug;

/// Default channel capacity
const DEFAULT_CAPACITY: usize = 64;

/// Observer publishing sync events on a broadcast channel
#[derive(Clone)]
pub struct BroadcastSyncObserver {
    sender: Arc<broadcast::Sender<SyncEvent>>,
    capacity: usize,
}

impl BroadcastSyncObserver {
    /// Create with default capacity (64)
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create with custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
            capacity,
        }
    }

    /// Receive events published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<SyncEvent> {
        self.sender.subscribe()
    }

    /// Get the current number of subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    fn publish(&self, event: SyncEvent) {
        match self.sender.send(event) {
            Ok(count) => debug!("Published sync event to {} subscribers", count),
            Err(_) => debug!("Published sync event but no subscribers"),
        }
    }
}

impl Default for BroadcastSyncObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BroadcastSyncObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BroadcastSyncObserver")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

impl SyncStatusObserver for BroadcastSyncObserver {
    fn on_started(&self) {
        self.publish(SyncEvent::started());
    }

    fn on_idle(&self) {
        self.publish(SyncEvent::idle());
    }

    fn on_error(&self, error: Option<&Error>) {
        self.publish(SyncEvent::failed(error.map(ToString::to_string)));
    }
}
