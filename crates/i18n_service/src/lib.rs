//! i18n_service - Language selection and translation lookup
//!
//! Owns the active language code, lazily loads per-language translation
//! tables, and resolves dotted keys with fallback to the default language:
//! - `catalog` - nested translation tables and dotted-key lookup
//! - `loader` - HTTP and file loaders for translation tables
//! - `storage` - durable persistence of the language preference
//! - `service` - the LanguageService itself

pub mod catalog;
pub mod config;
pub mod error;
pub mod loader;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use catalog::{TranslationNode, TranslationTable};
pub use config::I18nConfig;
pub use error::{I18nError, Result};
pub use loader::{FileTranslationLoader, HttpTranslationLoader, TranslationLoader};
pub use service::{LanguageService, DEFAULT_LANGUAGE, SUPPORTED_LANGUAGES};
pub use storage::{FilePreferenceStorage, PreferenceStorage, STORAGE_KEY};
