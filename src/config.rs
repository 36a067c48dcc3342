use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use validator::Validate;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Serialize, Deserialize, Clone, Default, Validate)]
pub struct Config {
    #[validate]
    pub github: GitHubConfig,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    #[serde(default)]
    pub defaults: FallbackTexts,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct GitHubConfig {
    #[validate(url(message = "api_url must be a valid URL"))]
    pub api_url: String,
    pub token: Option<String>,
    #[validate(length(min = 1, message = "user_agent cannot be empty"))]
    pub user_agent: String,
    #[validate(range(min = 1, message = "timeout_secs must be at least 1"))]
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            user_agent: format!("readme-forge/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    pub persist: bool,
    /// Overrides the platform data directory location of the field cache.
    pub cache_path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            persist: true,
            cache_path: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    Dark,
    Light,
    Monochrome,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub theme: ThemeName,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            theme: ThemeName::Dark,
        }
    }
}

/// Static texts used when neither the provider nor the heuristics supply a value.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct FallbackTexts {
    pub project_name: String,
    pub license: String,
    pub authors: String,
    pub contributing: String,
    pub tests: String,
    pub acknowledgments: String,
}

impl Default for FallbackTexts {
    fn default() -> Self {
        Self {
            project_name: "My Awesome Project".to_string(),
            license: "MIT".to_string(),
            authors: "You!".to_string(),
            contributing: "Fork it, make a PR, or open an issue—let’s build this together!"
                .to_string(),
            tests: "Tests coming soon—stay tuned!".to_string(),
            acknowledgments: "Shoutout to [P.D.R.G.] for pimping this README!".to_string(),
        }
    }
}

impl Config {
    pub fn create_default(path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(&Config::default())?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {:?}", path))?;
        let config: Config = toml::from_str(&content)?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config at {:?}: {}", path, e))?;
        Ok(config)
    }

    /// Loads the config, writing the defaults first if no file exists yet.
    pub fn ensure_config_exists(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("Creating default config at {:?}", path);
            Self::create_default(path)?;
        }

        let mut config = Self::load(path)?;
        config.apply_env();
        Ok(config)
    }

    /// `GITHUB_TOKEN` from the environment (or a `.env` file) wins over the file.
    pub fn apply_env(&mut self) {
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.trim().is_empty() {
                self.github.token = Some(token);
            }
        }
    }

    pub fn cache_path(&self) -> Result<PathBuf> {
        match &self.storage.cache_path {
            Some(path) => Ok(path.clone()),
            None => Ok(project_dirs()?.data_dir().join("fields.json")),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "readme-forge", "readme-forge")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}
