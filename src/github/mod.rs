use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use serde_json::Value;
use std::fmt;
use std::time::Duration;

mod response;

pub use response::{RepoInfo, RepositoryMetadata, INITIAL_COMMIT, UNKNOWN_LANGUAGE};

use crate::config::GitHubConfig;
use crate::error::ForgeError;

/// `owner/repo` as taken from the last two path segments of a URL.
///
/// Nothing is validated here; a malformed identifier just fails the lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentifier(String);

impl RepositoryIdentifier {
    pub fn from_url(url: &str) -> Self {
        let segments: Vec<&str> = url.split('/').collect();
        let start = segments.len().saturating_sub(2);
        Self(segments[start..].join("/"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch(&self, repo: &RepositoryIdentifier) -> Result<RepositoryMetadata, ForgeError>;
}

pub struct GitHubClient {
    client: reqwest::Client,
    api_url: String,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self, ForgeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| ForgeError::ParseError(format!("Invalid user agent: {}", e)))?,
        );
        if let Some(token) = &config.token {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", token))
                    .map_err(|e| ForgeError::ParseError(format!("Invalid token: {}", e)))?,
            );
        }

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_repo_info(&self, url: &str, repo: &RepositoryIdentifier) -> Result<RepoInfo, ForgeError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ForgeError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            tracing::debug!("Repo lookup for {} returned {}", repo, response.status());
            return Err(ForgeError::NotFoundError(repo.to_string()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ForgeError::NetworkError(format!("Failed to read response body: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| ForgeError::ParseError(format!("Failed to parse repository info: {}", e)))
    }

    /// Secondary lookups never fail the fetch; any problem degrades to `None`.
    async fn get_optional(&self, url: String) -> Option<Value> {
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("Request to {} failed: {}", url, e);
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::debug!("Request to {} returned {}", url, response.status());
            return None;
        }

        match response.json::<Value>().await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::debug!("Unreadable body from {}: {}", url, e);
                None
            }
        }
    }
}

#[async_trait]
impl MetadataSource for GitHubClient {
    async fn fetch(&self, repo: &RepositoryIdentifier) -> Result<RepositoryMetadata, ForgeError> {
        let base = format!("{}/repos/{}", self.api_url, repo);
        tracing::info!("Fetching metadata for {}", repo);

        let (info, languages, contents, commits) = tokio::join!(
            self.get_repo_info(&base, repo),
            self.get_optional(format!("{}/languages", base)),
            self.get_optional(format!("{}/contents", base)),
            self.get_optional(format!("{}/commits?per_page=1", base)),
        );

        Ok(RepositoryMetadata::from_parts(info?, languages, contents, commits))
    }
}
