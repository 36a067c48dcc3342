use super::TestUtils;
use crate::cache::{JsonFileCache, PersistenceCache};
use crate::config::FallbackTexts;
use crate::fields::{FieldName, FieldStore};
use crate::session::Session;
use std::fs;
use tempfile::TempDir;

fn file_session(path: &std::path::Path) -> Session<super::StubSource, JsonFileCache> {
    Session::new(
        TestUtils::stub_source(),
        FieldStore::load(JsonFileCache::open(path).unwrap()),
        FallbackTexts::default(),
    )
}

#[tokio::test]
async fn test_fields_survive_restart() {
    let dir = TempDir::new().unwrap();
    let cache_path = dir.path().join("fields.json");

    {
        let mut session = file_session(&cache_path);
        session
            .on_repository_url("https://github.com/octocat/Hello-World")
            .await
            .unwrap();
        session.on_edit("tests", "pytest").unwrap();
    }

    let session = file_session(&cache_path);
    assert_eq!(session.fields().get(FieldName::ProjectName), "Hello-World");
    assert_eq!(session.fields().get(FieldName::Tests), "pytest");
}

#[test]
fn test_clear_erases_cache_and_fields() {
    let dir = TempDir::new().unwrap();
    let cache_path = dir.path().join("fields.json");

    let mut session = file_session(&cache_path);
    session.on_edit("license", "MIT").unwrap();
    session.on_clear().unwrap();

    assert!(session.store().cache().is_empty());
    for (_, value) in session.fields().iter() {
        assert_eq!(value, "");
    }

    let reloaded = file_session(&cache_path);
    assert!(reloaded.fields().iter().all(|(_, v)| v.is_empty()));
}

#[tokio::test]
async fn test_submit_exports_exact_rendering() {
    let dir = TempDir::new().unwrap();
    let mut session = file_session(&dir.path().join("fields.json"));
    session
        .on_repository_url("octocat/Hello-World")
        .await
        .unwrap();

    let out_dir = dir.path().join("out");
    fs::create_dir_all(&out_dir).unwrap();
    let written = session.on_submit(&out_dir).unwrap();

    assert_eq!(written.file_name().unwrap(), "README.md");
    assert_eq!(fs::read_to_string(&written).unwrap(), session.rendered());
}
