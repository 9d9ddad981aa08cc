use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_TOKEN_URL: &str = "https://api.twitter.com/oauth2/token";
pub const DEFAULT_SEARCH_URL: &str = "https://api.twitter.com/2/tweets/search/recent";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub storage: StorageConfig,
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub token_url: String,
    pub search_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token_url: DEFAULT_TOKEN_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub query: String,
    pub max_results: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            query: "football".to_string(),
            max_results: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub database: PathBuf,
    /// Upper bound on posts processed per run.
    pub max_rows: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database: PathBuf::from("tweets.db"),
            max_rows: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub page_size: usize,
    pub histogram_bins: usize,
    pub export_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            histogram_bins: 10,
            export_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// `<config_dir>/tweetpulse/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tweetpulse").join("config.toml"))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.search.max_results) {
            return Err(ConfigError::Invalid(format!(
                "search.max_results must be between 1 and 100, got {}",
                self.search.max_results
            )));
        }
        if self.search.query.trim().is_empty() {
            return Err(ConfigError::Invalid("search.query must not be empty".into()));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid("api.timeout_secs must be at least 1".into()));
        }
        if self.storage.max_rows == 0 {
            return Err(ConfigError::Invalid("storage.max_rows must be at least 1".into()));
        }
        if self.dashboard.page_size == 0 {
            return Err(ConfigError::Invalid(
                "dashboard.page_size must be at least 1".into(),
            ));
        }
        if self.dashboard.histogram_bins == 0 {
            return Err(ConfigError::Invalid(
                "dashboard.histogram_bins must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
