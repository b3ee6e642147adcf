//! i18n service error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum I18nError {
    #[error("translation resource not found for language '{0}'")]
    NotFound(String),

    #[error("translation fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} fetching translations for '{language}'")]
    Status { language: String, status: u16 },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, I18nError>;
