//! Configuration loading from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{GraphError, GraphResult};

/// Top-level configuration. Every field has a default, so an empty file
/// is a valid config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub retrieval: RetrievalConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// How tweets are fetched by hashtag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Hashtags to search for, without the leading `#`.
    #[serde(default)]
    pub hashtags: Vec<String>,
    /// How many times a rate-limited search is retried before giving up.
    #[serde(default = "default_max_rate_limit_retries")]
    pub max_rate_limit_retries: u32,
    /// Seconds added to the server-reported reset time before retrying.
    #[serde(default = "default_rate_limit_padding_secs")]
    pub rate_limit_padding_secs: u64,
}

/// Output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_max_rate_limit_retries() -> u32 {
    5
}

fn default_rate_limit_padding_secs() -> u64 {
    1
}

fn default_pretty() -> bool {
    true
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            hashtags: Vec::new(),
            max_rate_limit_retries: default_max_rate_limit_retries(),
            rate_limit_padding_secs: default_rate_limit_padding_secs(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> GraphResult<Config> {
    toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<Config> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| GraphError::Config(format!("{}: {}", path.display(), e)))
}
