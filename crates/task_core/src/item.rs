//! Item - a single task entry
//!
//! The store treats items as opaque rows: it never rewrites `id` or
//! `title`, only flips `status`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status of a task item
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    /// Waiting to be done
    #[default]
    Pending,

    /// Checked off by the user
    Completed,
}

impl ItemStatus {
    /// The opposite status. Toggling twice returns the original status.
    pub fn toggled(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Get status as a simple string for display
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

/// A single task entry
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier, assigned by the caller and never changed
    pub id: String,

    /// Human-readable title
    pub title: String,

    /// Current status
    pub status: ItemStatus,
}

impl Item {
    /// Create a pending item with a freshly generated v4 UUID id
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            status: ItemStatus::Pending,
        }
    }

    /// Create an item with a caller-supplied id
    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        status: ItemStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
        }
    }
}
