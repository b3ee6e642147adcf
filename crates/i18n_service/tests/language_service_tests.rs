//! Scenario tests for the language service, using the file loader and
//! tempdir-backed preference storage.

use futures::StreamExt;
use i18n_service::{
    FilePreferenceStorage, FileTranslationLoader, LanguageService, PreferenceStorage,
};
use tempfile::{tempdir, TempDir};

type FileBackedService = LanguageService<FilePreferenceStorage, FileTranslationLoader>;

/// Write a small fixture table set into `dir/assets`: full tables for en and
/// es, nothing for fr or de.
async fn write_fixture_tables(dir: &TempDir) {
    let assets = dir.path().join("assets");
    tokio::fs::create_dir_all(&assets).await.unwrap();

    tokio::fs::write(
        assets.join("en.json"),
        r#"{
            "app": { "title": "MyTodoList" },
            "home": { "itemAdded": "Item added" },
            "settings": { "onlyInEnglish": "English only" }
        }"#,
    )
    .await
    .unwrap();

    tokio::fs::write(
        assets.join("es.json"),
        r#"{
            "app": { "title": "MiListaTareas" },
            "home": { "itemAdded": "Elemento añadido" }
        }"#,
    )
    .await
    .unwrap();
}

async fn service_in(dir: &TempDir) -> FileBackedService {
    write_fixture_tables(dir).await;
    LanguageService::new(
        FilePreferenceStorage::new(dir.path().join("data")),
        FileTranslationLoader::new(dir.path().join("assets")),
    )
}

#[tokio::test]
async fn fresh_service_reports_default_language() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;

    // Before any async load completes
    assert_eq!(service.current_language(), "en");
}

#[tokio::test]
async fn supported_languages_is_a_fresh_copy() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;

    let mut langs = service.supported_languages();
    assert_eq!(langs, ["en", "es", "fr", "de"]);

    langs.clear();
    assert_eq!(service.supported_languages().len(), 4);
}

#[tokio::test]
async fn unsupported_code_falls_back_to_default() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;

    service.set_language("xx").await;

    assert_eq!(service.current_language(), "en");
}

#[tokio::test]
async fn set_language_switches_translations() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;

    service.set_language("en").await;
    assert_eq!(service.translate("app.title"), "MyTodoList");

    service.set_language("es").await;
    assert_eq!(service.current_language(), "es");
    assert_eq!(service.translate("app.title"), "MiListaTareas");
}

#[tokio::test]
async fn translate_falls_back_to_default_table() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;

    service.set_language("en").await;
    service.set_language("es").await;

    // Key present only in the English table
    assert_eq!(service.translate("settings.onlyInEnglish"), "English only");
}

#[tokio::test]
async fn unknown_key_passes_through() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;

    assert_eq!(service.translate("nonexistent.key"), "nonexistent.key");

    service.set_language("es").await;
    assert_eq!(service.translate("nonexistent.key"), "nonexistent.key");
}

#[tokio::test]
async fn failed_table_load_still_switches_language() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;

    // No fr.json fixture exists; the load fails, the default table is
    // fetched as fallback, and the switch still happens.
    service.set_language("fr").await;

    assert_eq!(service.current_language(), "fr");
    assert_eq!(service.translate("app.title"), "MyTodoList");
}

#[tokio::test]
async fn set_language_persists_choice() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;

    service.set_language("es").await;

    let storage = FilePreferenceStorage::new(dir.path().join("data"));
    assert_eq!(storage.load_language().await.unwrap(), Some("es".to_string()));
}

#[tokio::test]
async fn restore_picks_up_persisted_language() {
    let dir = tempdir().unwrap();

    {
        let service = service_in(&dir).await;
        service.set_language("es").await;
    }

    let service = LanguageService::new(
        FilePreferenceStorage::new(dir.path().join("data")),
        FileTranslationLoader::new(dir.path().join("assets")),
    );

    // The saved language only takes effect once the restore completes
    assert_eq!(service.current_language(), "en");

    service.restore_persisted().await;
    assert_eq!(service.current_language(), "es");
    assert_eq!(service.translate("app.title"), "MiListaTareas");
}

#[tokio::test]
async fn restore_ignores_unsupported_persisted_value() {
    let dir = tempdir().unwrap();
    write_fixture_tables(&dir).await;

    let data = dir.path().join("data");
    tokio::fs::create_dir_all(&data).await.unwrap();
    tokio::fs::write(data.join("language.json"), r#"{ "language": "xx" }"#)
        .await
        .unwrap();

    let service = LanguageService::new(
        FilePreferenceStorage::new(&data),
        FileTranslationLoader::new(dir.path().join("assets")),
    );
    service.restore_persisted().await;

    assert_eq!(service.current_language(), "en");
}

#[tokio::test]
async fn storage_failure_keeps_in_memory_state() {
    let dir = tempdir().unwrap();
    write_fixture_tables(&dir).await;

    // A regular file where the storage directory should be makes every
    // persist attempt fail.
    let blocker = dir.path().join("blocker");
    tokio::fs::write(&blocker, "").await.unwrap();

    let service = LanguageService::new(
        FilePreferenceStorage::new(blocker.join("data")),
        FileTranslationLoader::new(dir.path().join("assets")),
    );

    service.set_language("es").await;

    assert_eq!(service.current_language(), "es");
    assert_eq!(service.translate("app.title"), "MiListaTareas");
}

#[tokio::test]
async fn language_changes_are_emitted_to_subscribers() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;

    let mut rx = service.subscribe();

    service.set_language("es").await;
    service.set_language("xx").await;

    assert_eq!(rx.recv().await.unwrap(), "es");
    // The unsupported code is emitted as its resolved value
    assert_eq!(rx.recv().await.unwrap(), "en");
}

#[tokio::test]
async fn translation_stream_follows_language_changes() {
    let dir = tempdir().unwrap();
    let service = service_in(&dir).await;
    service.set_language("en").await;

    let mut stream = Box::pin(service.translation_stream("app.title"));

    assert_eq!(stream.next().await.unwrap(), "MyTodoList");

    service.set_language("es").await;
    assert_eq!(stream.next().await.unwrap(), "MiListaTareas");

    service.set_language("en").await;
    assert_eq!(stream.next().await.unwrap(), "MyTodoList");
}

#[tokio::test]
async fn shipped_asset_tables_resolve_the_app_keys() {
    let assets = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../assets/i18n");

    let dir = tempdir().unwrap();
    let service = LanguageService::new(
        FilePreferenceStorage::new(dir.path().join("data")),
        FileTranslationLoader::new(assets),
    );

    for code in ["en", "es", "fr", "de"] {
        service.set_language(code).await;
        assert_eq!(service.current_language(), code);

        // Every shipped table carries the full key set
        for key in [
            "app.title",
            "home.itemAdded",
            "add.error",
            "settings.selectLanguage",
        ] {
            assert_ne!(service.translate(key), key, "missing {} in {}", key, code);
        }
    }
}
