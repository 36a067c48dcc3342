use crate::cache::MemoryCache;
use crate::config::FallbackTexts;
use crate::error::ForgeError;
use crate::fields::FieldStore;
use crate::github::{MetadataSource, RepositoryIdentifier, RepositoryMetadata};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Mutex;

mod end_to_end;
mod persistence;

/// Serves canned metadata for a single repository and records every lookup.
pub(crate) struct StubSource {
    repo: String,
    metadata: RepositoryMetadata,
    pub lookups: Mutex<Vec<String>>,
}

#[async_trait]
impl MetadataSource for StubSource {
    async fn fetch(&self, repo: &RepositoryIdentifier) -> Result<RepositoryMetadata, ForgeError> {
        self.lookups.lock().unwrap().push(repo.to_string());
        if repo.as_str() == self.repo {
            Ok(self.metadata.clone())
        } else {
            Err(ForgeError::NotFoundError(repo.to_string()))
        }
    }
}

// Test utilities and helpers
pub(crate) struct TestUtils;

impl TestUtils {
    pub fn hello_world_metadata() -> RepositoryMetadata {
        RepositoryMetadata {
            name: Some("Hello-World".to_string()),
            description: None,
            license_name: Some("MIT".to_string()),
            owner_login: Some("octocat".to_string()),
            languages: vec![("Python".to_string(), 100)],
            top_level_files: ["main.py", "requirements.txt"]
                .iter()
                .map(|f| f.to_string())
                .collect::<BTreeSet<_>>(),
            latest_commit_message: Some("init".to_string()),
        }
    }

    pub fn stub_source() -> StubSource {
        StubSource {
            repo: "octocat/Hello-World".to_string(),
            metadata: Self::hello_world_metadata(),
            lookups: Mutex::new(Vec::new()),
        }
    }

    pub fn memory_session() -> crate::session::Session<StubSource, MemoryCache> {
        crate::session::Session::new(
            Self::stub_source(),
            FieldStore::load(MemoryCache::new()),
            FallbackTexts::default(),
        )
    }
}
