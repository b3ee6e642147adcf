//! Broadcast primitive for list snapshots
//!
//! Subscribers are plain unbounded channels, so a send never blocks and a
//! broadcast completes synchronously inside the mutating call. Senders whose
//! receiver has been dropped are pruned on the next broadcast.

use std::sync::Mutex;

use task_core::Item;
use tokio::sync::mpsc;

/// Fans a full-list snapshot out to every registered subscriber
pub struct ListBroadcaster {
    subscribers: Mutex<Vec<mpsc::UnboundedSender<Vec<Item>>>>,
}

impl ListBroadcaster {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a new subscriber.
    /// Returns a receiver that yields one snapshot per mutation.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Vec<Item>> {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.push(tx);

        tracing::debug!(
            subscriber_count = subscribers.len(),
            "New list subscriber added"
        );

        rx
    }

    /// Send a snapshot to all subscribers, in registration order.
    pub fn broadcast(&self, snapshot: Vec<Item>) {
        let mut subscribers = self.subscribers.lock().unwrap();

        // Remove disconnected subscribers and send to active ones
        subscribers.retain(|sender| sender.send(snapshot.clone()).is_ok());

        tracing::debug!(
            active_subscribers = subscribers.len(),
            items = snapshot.len(),
            "List snapshot broadcasted to subscribers"
        );
    }

    /// Number of currently registered subscribers
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

impl Default for ListBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
