//! item_store - Observable store for task items
//!
//! Single source of truth for the task list. Every mutation publishes the
//! new full snapshot to all subscribers, in registration order.

pub mod broadcast;
pub mod store;

// Re-export commonly used types
pub use broadcast::ListBroadcaster;
pub use store::ItemStore;
