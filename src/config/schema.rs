//! Configuration schema for pathcache
//!
//! Configuration is stored at `~/.config/pathcache/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Cache settings
    pub cache: CacheConfig,

    /// Search settings
    pub search: SearchConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Cache settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Install the cached filter (false = always run the uncached search)
    pub enabled: bool,

    /// Cache file location (defaults to the per-user config directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            file: None,
        }
    }
}

/// Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Suffixes tried in order when matching a name to a file
    pub suffixes: Vec<String>,

    /// Environment variable holding the candidate directories
    pub path_var: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            suffixes: vec![".so".to_string(), ".dylib".to_string(), ".dll".to_string()],
            path_var: "PATHCACHE_PATH".to_string(),
        }
    }
}
