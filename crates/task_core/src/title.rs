//! Title validation for new items
//!
//! The store itself accepts any item; this is the rule the add-item form
//! applies before handing an item over.

use thiserror::Error;

/// Minimum title length after trimming
pub const TITLE_MIN_LEN: usize = 3;

/// Maximum title length after trimming
pub const TITLE_MAX_LEN: usize = 100;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TitleError {
    #[error("title is empty")]
    Empty,

    #[error("title must be at least 3 characters, got {0}")]
    TooShort(usize),

    #[error("title must be at most 100 characters, got {0}")]
    TooLong(usize),
}

/// Validate a raw title as entered by the user.
///
/// Returns the trimmed title on success. Length limits are counted in
/// characters, not bytes.
pub fn validate_title(raw: &str) -> Result<String, TitleError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TitleError::Empty);
    }

    let len = trimmed.chars().count();
    if len < TITLE_MIN_LEN {
        return Err(TitleError::TooShort(len));
    }
    if len > TITLE_MAX_LEN {
        return Err(TitleError::TooLong(len));
    }

    Ok(trimmed.to_string())
}
