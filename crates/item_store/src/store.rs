//! ItemStore - single source of truth for the task list

use std::sync::{Arc, RwLock};

use task_core::Item;
use tokio::sync::mpsc;

use crate::broadcast::ListBroadcaster;

/// Observable, insertion-ordered list of task items.
///
/// Cloning is cheap; clones share the same list and subscriber set. All
/// operations are synchronous and infallible, and every mutation publishes
/// exactly one snapshot of the new full list.
#[derive(Clone)]
pub struct ItemStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    items: RwLock<Vec<Item>>,
    broadcaster: ListBroadcaster,
}

impl ItemStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(StoreInner {
                items: RwLock::new(Vec::new()),
                broadcaster: ListBroadcaster::new(),
            }),
        }
    }

    /// Get the current full list, in insertion order
    pub fn items(&self) -> Vec<Item> {
        self.inner.items.read().unwrap().clone()
    }

    /// Append an item to the end of the list.
    ///
    /// No uniqueness check is performed; id discipline is the caller's.
    pub fn add_item(&self, item: Item) {
        let snapshot = {
            let mut items = self.inner.items.write().unwrap();
            items.push(item);
            items.clone()
        };
        self.inner.broadcaster.broadcast(snapshot);
    }

    /// Flip the status of the item with the given id.
    ///
    /// An unknown id leaves the list unchanged. The snapshot is published
    /// either way, so subscribers see exactly one emission per call.
    pub fn toggle_item(&self, id: &str) {
        let snapshot = {
            let mut items = self.inner.items.write().unwrap();
            for item in items.iter_mut().filter(|item| item.id == id) {
                item.status = item.status.toggled();
            }
            items.clone()
        };
        self.inner.broadcaster.broadcast(snapshot);
    }

    /// Remove the item with the given id, if present.
    ///
    /// An unknown id is a no-op; the snapshot is still published.
    pub fn delete_item(&self, id: &str) {
        let snapshot = {
            let mut items = self.inner.items.write().unwrap();
            items.retain(|item| item.id != id);
            items.clone()
        };
        self.inner.broadcaster.broadcast(snapshot);
    }

    /// Count of items with completed status
    pub fn completed_count(&self) -> usize {
        self.inner
            .items
            .read()
            .unwrap()
            .iter()
            .filter(|item| item.status.is_completed())
            .count()
    }

    /// Subscribe to list snapshots.
    ///
    /// The receiver yields one full snapshot per mutation, in mutation
    /// order. It does not replay the current list on registration.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<Vec<Item>> {
        self.inner.broadcaster.subscribe()
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
