//! Runtime configuration for the i18n service

use std::path::PathBuf;

const DEFAULT_ASSET_BASE_URL: &str = "http://localhost:8100";

#[derive(Debug, Clone)]
pub struct I18nConfig {
    /// Base URL the HTTP loader fetches `/assets/i18n/{code}.json` from
    pub asset_base_url: String,

    /// Directory the language preference is persisted under
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(".tasklist")
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl I18nConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self {
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
            data_dir: default_data_dir(),
        };

        if let Ok(base_url) = std::env::var("TASKLIST_I18N_BASE_URL") {
            config.asset_base_url = base_url;
        }
        if let Ok(data_dir) = std::env::var("TASKLIST_DATA_DIR") {
            config.data_dir = PathBuf::from(data_dir);
        }

        config
    }
}
