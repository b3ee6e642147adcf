//! Language preference storage trait and implementations

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::error::Result;

/// Key the preference is stored under; the file backend mirrors it in the
/// file name
pub const STORAGE_KEY: &str = "language";

#[derive(Debug, Serialize, Deserialize)]
struct LanguagePreference {
    language: String,
}

/// Durable store for the single persisted language preference
#[async_trait]
pub trait PreferenceStorage: Send + Sync {
    /// Load the persisted language code, if any
    async fn load_language(&self) -> Result<Option<String>>;

    /// Persist the language code
    async fn save_language(&self, code: &str) -> Result<()>;
}

/// File-based preference storage
#[derive(Clone)]
pub struct FilePreferenceStorage {
    base_path: PathBuf,
}

impl FilePreferenceStorage {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn preference_path(&self) -> PathBuf {
        self.base_path.join(format!("{}.json", STORAGE_KEY))
    }
}

#[async_trait]
impl PreferenceStorage for FilePreferenceStorage {
    async fn load_language(&self) -> Result<Option<String>> {
        let path = self.preference_path();

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path).await?;
        let pref: LanguagePreference = serde_json::from_str(&contents)?;

        Ok(Some(pref.language))
    }

    async fn save_language(&self, code: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;

        let path = self.preference_path();
        let contents = serde_json::to_string_pretty(&LanguagePreference {
            language: code.to_string(),
        })?;
        fs::write(&path, contents).await?;

        Ok(())
    }
}
