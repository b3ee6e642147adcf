//! LanguageService - active language, table cache, translation lookup

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use async_stream::stream;
use futures::Stream;
use tokio::sync::mpsc;

use crate::catalog::TranslationTable;
use crate::loader::TranslationLoader;
use crate::storage::PreferenceStorage;

/// Language codes the service accepts, in display order
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["en", "es", "fr", "de"];

/// Default and fallback language
pub const DEFAULT_LANGUAGE: &str = "en";

/// Owns the active language and resolves translated strings with fallback.
///
/// Translation tables are fetched lazily, at most once per language for the
/// service's lifetime. `translate` is synchronous; switching languages is
/// async because it may fetch a table and persist the choice. Every failure
/// path degrades: an unsupported code becomes the default, a failed fetch
/// falls back to the default table, and an unknown key is returned as-is.
pub struct LanguageService<S, L> {
    storage: Arc<S>,
    loader: Arc<L>,
    state: Arc<LanguageState>,
}

struct LanguageState {
    current: RwLock<String>,
    tables: RwLock<HashMap<String, TranslationTable>>,
    // Serializes fetches so each language is fetched at most once
    load_lock: tokio::sync::Mutex<()>,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<String>>>,
}

impl<S, L> Clone for LanguageService<S, L> {
    fn clone(&self) -> Self {
        Self {
            storage: Arc::clone(&self.storage),
            loader: Arc::clone(&self.loader),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S, L> LanguageService<S, L>
where
    S: PreferenceStorage + 'static,
    L: TranslationLoader + 'static,
{
    /// Create a service starting on the default language with no tables
    /// loaded. Call [`restore_persisted`](Self::restore_persisted) (usually
    /// from a spawned task) to pick up the saved preference.
    pub fn new(storage: S, loader: L) -> Self {
        Self {
            storage: Arc::new(storage),
            loader: Arc::new(loader),
            state: Arc::new(LanguageState {
                current: RwLock::new(DEFAULT_LANGUAGE.to_string()),
                tables: RwLock::new(HashMap::new()),
                load_lock: tokio::sync::Mutex::new(()),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Get the current active language code.
    ///
    /// Reports the default until [`restore_persisted`](Self::restore_persisted)
    /// has finished loading the saved language.
    pub fn current_language(&self) -> String {
        self.state.current.read().unwrap().clone()
    }

    /// The fixed supported set, as a fresh copy
    pub fn supported_languages(&self) -> Vec<String> {
        SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect()
    }

    /// Set the active language and persist the choice.
    ///
    /// An unsupported code is replaced by the default. The table for the
    /// resolved code is loaded before the switch takes effect. Neither a
    /// failed fetch nor a failed persist surfaces to the caller; both are
    /// logged and the in-memory state stays authoritative.
    pub async fn set_language(&self, code: &str) {
        let resolved = if SUPPORTED_LANGUAGES.contains(&code) {
            code.to_string()
        } else {
            tracing::warn!(
                "Unsupported language: {}. Falling back to {}",
                code,
                DEFAULT_LANGUAGE
            );
            DEFAULT_LANGUAGE.to_string()
        };

        self.ensure_loaded(&resolved).await;
        self.apply_language(&resolved);

        if let Err(err) = self.storage.save_language(&resolved).await {
            tracing::error!("Failed to save language to storage: {}", err);
        }
    }

    /// Translate a dotted key to the current language.
    ///
    /// Falls back to the default-language table, then to the key itself.
    pub fn translate(&self, key: &str) -> String {
        let current = self.state.current.read().unwrap().clone();
        let tables = self.state.tables.read().unwrap();

        tables
            .get(&current)
            .and_then(|table| table.lookup(key))
            .or_else(|| {
                tables
                    .get(DEFAULT_LANGUAGE)
                    .and_then(|table| table.lookup(key))
            })
            .unwrap_or(key)
            .to_string()
    }

    /// Subscribe to language changes.
    ///
    /// The receiver yields the resolved code once per completed switch,
    /// including the switch performed by a restore.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.state.subscribers.lock().unwrap().push(tx);
        rx
    }

    /// Stream of translations for one key.
    ///
    /// Immediately yields the current translation, then a fresh translation
    /// on every language change, for as long as the stream is held.
    pub fn translation_stream(&self, key: &str) -> impl Stream<Item = String> + 'static {
        let service = self.clone();
        let key = key.to_string();
        let mut changes = self.subscribe();

        stream! {
            yield service.translate(&key);
            while changes.recv().await.is_some() {
                yield service.translate(&key);
            }
        }
    }

    /// Restore the persisted language choice.
    ///
    /// Reads the saved code (absent or unsupported values fall back to the
    /// default), loads its table, then flips the current language. Callers
    /// typically spawn this at startup; until it completes, early readers
    /// observe the default language.
    pub async fn restore_persisted(&self) {
        let saved = match self.storage.load_language().await {
            Ok(Some(code)) => code,
            Ok(None) => DEFAULT_LANGUAGE.to_string(),
            Err(err) => {
                tracing::warn!("Failed to load language from storage: {}", err);
                DEFAULT_LANGUAGE.to_string()
            }
        };

        let resolved = if SUPPORTED_LANGUAGES.contains(&saved.as_str()) {
            saved
        } else {
            DEFAULT_LANGUAGE.to_string()
        };

        self.ensure_loaded(&resolved).await;
        self.apply_language(&resolved);
    }

    fn apply_language(&self, code: &str) {
        *self.state.current.write().unwrap() = code.to_string();

        let mut subscribers = self.state.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(code.to_string()).is_ok());
    }

    /// Load the table for `code` unless it is already cached.
    ///
    /// A failed fetch is logged; if the default language's table is not yet
    /// cached, a fallback fetch of the default is attempted so `translate`
    /// still has something to resolve against. A load failure never fails
    /// the caller and never resets the current language.
    async fn ensure_loaded(&self, code: &str) {
        let _guard = self.state.load_lock.lock().await;

        if self.state.tables.read().unwrap().contains_key(code) {
            return;
        }

        match self.loader.load(code).await {
            Ok(table) => {
                self.state
                    .tables
                    .write()
                    .unwrap()
                    .insert(code.to_string(), table);
            }
            Err(err) => {
                tracing::error!(language = %code, "Failed to load translations: {}", err);

                let default_loaded = self
                    .state
                    .tables
                    .read()
                    .unwrap()
                    .contains_key(DEFAULT_LANGUAGE);
                if code != DEFAULT_LANGUAGE && !default_loaded {
                    match self.loader.load(DEFAULT_LANGUAGE).await {
                        Ok(table) => {
                            self.state
                                .tables
                                .write()
                                .unwrap()
                                .insert(DEFAULT_LANGUAGE.to_string(), table);
                        }
                        Err(err) => {
                            tracing::error!("Failed to load fallback translations: {}", err);
                        }
                    }
                }
            }
        }
    }
}
