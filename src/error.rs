//! Error types for pathcache
//!
//! All modules use `PathCacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pathcache operations
pub type PathCacheResult<T> = Result<T, PathCacheError>;

/// All errors that can occur in pathcache
#[derive(Error, Debug)]
pub enum PathCacheError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Cache errors
    #[error("Failed to write cache file {path}: {source}")]
    CacheWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Search errors
    #[error("Search for {name} failed: {reason}")]
    Search { name: String, reason: String },

    #[error("No candidate directories. Pass --dir or set {0}")]
    NoCandidates(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl PathCacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a cache write error for the given file
    pub fn cache_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::CacheWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a search failure for a name
    pub fn search(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Search {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ConfigInvalid { .. } => Some("Run: pathcache config init --force"),
            Self::CacheWrite { .. } => Some("Check permissions on the cache directory, or run: pathcache path"),
            Self::NoCandidates(_) => Some("Example: pathcache resolve libfoo --dir /usr/lib"),
            _ => None,
        }
    }
}
