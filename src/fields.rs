use std::fmt;
use std::str::FromStr;

use crate::cache::PersistenceCache;
use crate::config::FallbackTexts;
use crate::error::ForgeError;
use crate::github::RepositoryMetadata;
use crate::inference::InferredDefaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    ProjectName,
    Description,
    Installation,
    Usage,
    License,
    Dependencies,
    Contributing,
    Tests,
    Authors,
    Acknowledgments,
}

impl FieldName {
    /// Document order; also the order of the rendered sections.
    pub const ALL: [FieldName; 10] = [
        FieldName::ProjectName,
        FieldName::Description,
        FieldName::Installation,
        FieldName::Usage,
        FieldName::License,
        FieldName::Dependencies,
        FieldName::Contributing,
        FieldName::Tests,
        FieldName::Authors,
        FieldName::Acknowledgments,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::ProjectName => "project_name",
            FieldName::Description => "description",
            FieldName::Installation => "installation",
            FieldName::Usage => "usage",
            FieldName::License => "license",
            FieldName::Dependencies => "dependencies",
            FieldName::Contributing => "contributing",
            FieldName::Tests => "tests",
            FieldName::Authors => "authors",
            FieldName::Acknowledgments => "acknowledgments",
        }
    }

    /// Section heading, `None` for the project name which becomes the title.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            FieldName::ProjectName => None,
            FieldName::Description => Some("Description"),
            FieldName::Installation => Some("Installation"),
            FieldName::Usage => Some("Usage"),
            FieldName::License => Some("License"),
            FieldName::Dependencies => Some("Dependencies"),
            FieldName::Contributing => Some("Contributing"),
            FieldName::Tests => Some("Tests"),
            FieldName::Authors => Some("Authors"),
            FieldName::Acknowledgments => Some("Acknowledgments"),
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ForgeError::UnknownFieldError(s.to_string()))
    }
}

/// The ten README fields. Every field always has a value, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFields {
    values: [String; 10],
}

impl DocumentFields {
    pub fn get(&self, field: FieldName) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::ALL.iter().map(move |field| (*field, self.get(*field)))
    }
}

pub struct FieldStore<C: PersistenceCache> {
    fields: DocumentFields,
    cache: C,
}

impl<C: PersistenceCache> FieldStore<C> {
    pub fn load(cache: C) -> Self {
        let mut fields = DocumentFields::default();
        for field in FieldName::ALL {
            fields.set(field, cache.get(field.as_str()).unwrap_or_default());
        }
        Self { fields, cache }
    }

    pub fn fields(&self) -> &DocumentFields {
        &self.fields
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), ForgeError> {
        let field: FieldName = key.parse()?;
        self.set_field(field, value)
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> Result<(), ForgeError> {
        let value = value.into();
        self.cache.set(field.as_str(), &value)?;
        self.fields.set(field, value);
        Ok(())
    }

    /// Provider data first, heuristics second, static fallback text last.
    ///
    /// All ten values are persisted in one write before any field changes.
    pub fn apply_inferred_defaults(
        &mut self,
        metadata: &RepositoryMetadata,
        inferred: &InferredDefaults,
        repo_url: &str,
        fallbacks: &FallbackTexts,
    ) -> Result<(), ForgeError> {
        let provided = |value: &Option<String>| value.clone().filter(|s| !s.is_empty());

        let mut next = DocumentFields::default();
        next.set(
            FieldName::ProjectName,
            provided(&metadata.name).unwrap_or_else(|| fallbacks.project_name.clone()),
        );
        next.set(
            FieldName::Description,
            provided(&metadata.description).unwrap_or_else(|| {
                format!(
                    "A {} project to {}.",
                    metadata.primary_language(),
                    inferred.purpose
                )
            }),
        );
        next.set(
            FieldName::Installation,
            format!(
                "Clone the repo:\ngit clone {}\n{}",
                repo_url, inferred.install_steps
            ),
        );
        next.set(FieldName::Usage, inferred.usage_steps.clone());
        next.set(
            FieldName::License,
            provided(&metadata.license_name).unwrap_or_else(|| fallbacks.license.clone()),
        );
        next.set(FieldName::Dependencies, inferred.dependencies.clone());
        next.set(FieldName::Contributing, fallbacks.contributing.clone());
        next.set(FieldName::Tests, fallbacks.tests.clone());
        next.set(
            FieldName::Authors,
            metadata
                .owner_login
                .clone()
                .unwrap_or_else(|| fallbacks.authors.clone()),
        );
        next.set(FieldName::Acknowledgments, fallbacks.acknowledgments.clone());

        let entries: Vec<(&str, &str)> = next
            .iter()
            .map(|(field, value)| (field.as_str(), value))
            .collect();
        self.cache.set_many(&entries)?;

        self.fields = next;
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), ForgeError> {
        self.cache.clear()?;
        self.fields = DocumentFields::default();
        Ok(())
    }
}
