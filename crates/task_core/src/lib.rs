//! task_core - Core types for the task-list system
//!
//! This crate provides the item model shared by the store and any consuming
//! UI layer:
//! - `item` - Item and ItemStatus
//! - `title` - title validation rules for new items

pub mod item;
pub mod title;

// Re-export commonly used types
pub use item::{Item, ItemStatus};
pub use title::{validate_title, TitleError, TITLE_MAX_LEN, TITLE_MIN_LEN};
