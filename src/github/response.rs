use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::error::ForgeError;

pub const UNKNOWN_LANGUAGE: &str = "Unknown";
pub const INITIAL_COMMIT: &str = "Initial commit";

/// Subset of `GET /repos/{owner}/{repo}` the generator cares about.
///
/// Every field is optional: deleted-account and anonymized repositories come
/// back without an owner, and most repositories have no license object.
#[derive(Debug, Default, Deserialize)]
pub struct RepoInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<LicenseInfo>,
    #[serde(default)]
    pub owner: Option<OwnerInfo>,
}

#[derive(Debug, Deserialize)]
pub struct LicenseInfo {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OwnerInfo {
    #[serde(default)]
    pub login: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommitEntry {
    commit: CommitDetail,
}

#[derive(Debug, Deserialize)]
struct CommitDetail {
    message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepositoryMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub license_name: Option<String>,
    pub owner_login: Option<String>,
    /// Language name and byte count, in provider order (largest first).
    pub languages: Vec<(String, u64)>,
    pub top_level_files: BTreeSet<String>,
    pub latest_commit_message: Option<String>,
}

impl RepositoryMetadata {
    pub fn from_parts(
        info: RepoInfo,
        languages: Option<Value>,
        contents: Option<Value>,
        commits: Option<Value>,
    ) -> Self {
        Self {
            name: info.name,
            description: info.description,
            license_name: info.license.and_then(|l| l.name),
            owner_login: info.owner.and_then(|o| o.login),
            languages: languages.map(parse_languages).unwrap_or_default(),
            top_level_files: contents.map(parse_file_names).unwrap_or_default(),
            latest_commit_message: commits.and_then(parse_latest_commit),
        }
    }

    pub fn primary_language(&self) -> &str {
        self.languages
            .first()
            .map(|(name, _)| name.as_str())
            .unwrap_or(UNKNOWN_LANGUAGE)
    }

    pub fn latest_commit_message(&self) -> &str {
        self.latest_commit_message
            .as_deref()
            .unwrap_or(INITIAL_COMMIT)
    }
}

// Relies on serde_json's preserve_order so the first key stays the dominant language.
pub fn parse_languages(value: Value) -> Vec<(String, u64)> {
    match value {
        Value::Object(map) => map
            .into_iter()
            .map(|(name, bytes)| (name, bytes.as_u64().unwrap_or(0)))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn parse_file_names(value: Value) -> BTreeSet<String> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| entry.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect(),
        other => {
            let err = ForgeError::MalformedResponseError(format!(
                "contents listing is not an array: {}",
                other
            ));
            tracing::debug!("{}; using an empty file set", err);
            BTreeSet::new()
        }
    }
}

pub fn parse_latest_commit(value: Value) -> Option<String> {
    match value {
        Value::Array(mut commits) if !commits.is_empty() => {
            serde_json::from_value::<CommitEntry>(commits.swap_remove(0))
                .map(|entry| entry.commit.message)
                .map_err(|e| tracing::debug!("Unreadable commit entry: {}", e))
                .ok()
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_languages_keep_provider_order() {
        let langs = parse_languages(json!({"TypeScript": 900, "CSS": 50, "HTML": 10}));
        let names: Vec<&str> = langs.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["TypeScript", "CSS", "HTML"]);
    }

    #[test]
    fn test_primary_language_sentinel() {
        let metadata = RepositoryMetadata::default();
        assert_eq!(metadata.primary_language(), "Unknown");
        assert_eq!(metadata.latest_commit_message(), "Initial commit");
    }

    #[test]
    fn test_error_object_contents_yield_empty_set() {
        let files = parse_file_names(json!({"message": "Not Found", "error": "Not Found"}));
        assert!(files.is_empty());
    }

    #[test]
    fn test_contents_names() {
        let files = parse_file_names(json!([
            {"name": "main.py", "type": "file"},
            {"name": "src", "type": "dir"}
        ]));
        assert!(files.contains("main.py"));
        assert!(files.contains("src"));
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_latest_commit_message() {
        assert_eq!(
            parse_latest_commit(json!([{"commit": {"message": "init"}}])),
            Some("init".to_string())
        );
        assert_eq!(parse_latest_commit(json!([])), None);
        assert_eq!(
            parse_latest_commit(json!({"message": "Git Repository is empty."})),
            None
        );
    }

    #[test]
    fn test_ownerless_payload_defaults() {
        let info: RepoInfo =
            serde_json::from_value(json!({"name": "ghost-repo", "owner": null, "license": null}))
                .unwrap();
        let metadata = RepositoryMetadata::from_parts(info, None, None, None);
        assert_eq!(metadata.name.as_deref(), Some("ghost-repo"));
        assert!(metadata.owner_login.is_none());
        assert!(metadata.license_name.is_none());
    }
}
