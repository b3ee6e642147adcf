//! Translation table loaders
//!
//! A table is fetched from an external resource keyed by language code.
//! Loaders are stateless; caching happens in the service.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::catalog::TranslationTable;
use crate::error::{I18nError, Result};

/// Source of per-language translation tables
#[async_trait]
pub trait TranslationLoader: Send + Sync {
    /// Fetch the table for a language code
    async fn load(&self, code: &str) -> Result<TranslationTable>;
}

/// Loader fetching `{base_url}/assets/i18n/{code}.json` over HTTP
pub struct HttpTranslationLoader {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTranslationLoader {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TranslationLoader for HttpTranslationLoader {
    async fn load(&self, code: &str) -> Result<TranslationTable> {
        let url = format!("{}/assets/i18n/{}.json", self.base_url, code);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(I18nError::Status {
                language: code.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<TranslationTable>().await?)
    }
}

/// Loader reading `{dir}/{code}.json` from disk, for deployments that ship
/// the tables as local assets
pub struct FileTranslationLoader {
    dir: PathBuf,
}

impl FileTranslationLoader {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn table_path(&self, code: &str) -> PathBuf {
        self.dir.join(format!("{}.json", code))
    }
}

#[async_trait]
impl TranslationLoader for FileTranslationLoader {
    async fn load(&self, code: &str) -> Result<TranslationTable> {
        let path = self.table_path(code);

        if !path.exists() {
            return Err(I18nError::NotFound(code.to_string()));
        }

        let contents = fs::read_to_string(&path).await?;
        let table: TranslationTable = serde_json::from_str(&contents)?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_file_loader_reads_table() {
        let dir = tempdir().unwrap();
        tokio::fs::write(
            dir.path().join("en.json"),
            r#"{ "app": { "title": "MyTodoList" } }"#,
        )
        .await
        .unwrap();

        let loader = FileTranslationLoader::new(dir.path());
        let table = loader.load("en").await.unwrap();

        assert_eq!(table.lookup("app.title"), Some("MyTodoList"));
    }

    #[tokio::test]
    async fn test_file_loader_missing_language() {
        let dir = tempdir().unwrap();
        let loader = FileTranslationLoader::new(dir.path());

        let err = loader.load("xx").await.unwrap_err();
        assert!(matches!(err, I18nError::NotFound(code) if code == "xx"));
    }

    #[tokio::test]
    async fn test_file_loader_malformed_json() {
        let dir = tempdir().unwrap();
        tokio::fs::write(dir.path().join("en.json"), "not json")
            .await
            .unwrap();

        let loader = FileTranslationLoader::new(dir.path());
        assert!(loader.load("en").await.is_err());
    }
}
