use std::path::{Path, PathBuf};

use crate::cache::PersistenceCache;
use crate::config::FallbackTexts;
use crate::error::ForgeError;
use crate::export;
use crate::fields::{DocumentFields, FieldStore};
use crate::github::{MetadataSource, RepositoryIdentifier};
use crate::inference;
use crate::render;

/// One editing session: the field store plus the handlers for each user event.
pub struct Session<S: MetadataSource, C: PersistenceCache> {
    source: S,
    store: FieldStore<C>,
    fallbacks: FallbackTexts,
}

impl<S: MetadataSource, C: PersistenceCache> Session<S, C> {
    pub fn new(source: S, store: FieldStore<C>, fallbacks: FallbackTexts) -> Self {
        Self {
            source,
            store,
            fallbacks,
        }
    }

    pub fn fields(&self) -> &DocumentFields {
        self.store.fields()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn store(&self) -> &FieldStore<C> {
        &self.store
    }

    pub fn rendered(&self) -> String {
        render::render(self.store.fields())
    }

    /// Fetches the repository and fills every field from it.
    ///
    /// Fields are only touched once the whole fetch has succeeded, so a
    /// failed lookup leaves manual edits in place.
    pub async fn on_repository_url(&mut self, url: &str) -> Result<String, ForgeError> {
        let url = url.trim();
        if url.is_empty() {
            return Ok(self.rendered());
        }

        let repo = RepositoryIdentifier::from_url(url);
        let metadata = match self.source.fetch(&repo).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::warn!("Could not fetch {}: {}", repo, e);
                return Err(e);
            }
        };

        let inferred = inference::infer(&metadata);
        tracing::debug!(
            "Primary language {}, {} top-level entries",
            metadata.primary_language(),
            metadata.top_level_files.len()
        );

        self.store
            .apply_inferred_defaults(&metadata, &inferred, url, &self.fallbacks)?;
        Ok(self.rendered())
    }

    pub fn on_edit(&mut self, field: &str, value: impl Into<String>) -> Result<String, ForgeError> {
        self.store.set(field, value)?;
        Ok(self.rendered())
    }

    pub fn on_submit(&self, target: &Path) -> Result<PathBuf, ForgeError> {
        export::export(&self.rendered(), target)
    }

    pub fn on_clear(&mut self) -> Result<(), ForgeError> {
        tracing::info!("Clearing all fields");
        self.store.clear()
    }
}
