//! Filesystem-backed search host

use crate::config::schema::SearchConfig;
use crate::error::PathCacheResult;
use crate::search::{SearchHost, SearchOutcome};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Uncached search over real directories
#[derive(Debug, Clone)]
pub struct FsSearchHost {
    suffixes: Vec<String>,
}

impl FsSearchHost {
    /// Create a host trying the given suffixes in order
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    /// Create a host from the search configuration
    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.suffixes.clone())
    }
}

/// Check if `path` is a regular file. Entries that cannot be inspected
/// (symlink loops, missing permissions) count as no match.
fn is_regular_file(path: &Path) -> bool {
    match std::fs::metadata(path) {
        Ok(meta) => meta.is_file(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => false,
        Err(e) => {
            debug!("Skipping {}: {}", path.display(), e);
            false
        }
    }
}

/// First file named `name + suffix` in `dir`, trying suffixes in order
fn match_in_dir(name: &str, dir: &str, suffixes: &[String]) -> Option<PathBuf> {
    let dir_path = Path::new(dir);
    if !dir_path.is_dir() {
        return None;
    }

    suffixes
        .iter()
        .map(|suffix| dir_path.join(format!("{}{}", name, suffix)))
        .find(|candidate| is_regular_file(candidate))
}

impl SearchHost for FsSearchHost {
    fn default_search(
        &self,
        candidates: &[String],
        name: &str,
        suffixes: &[String],
    ) -> PathCacheResult<SearchOutcome> {
        // A bare suffix can match directories and other non-library entries
        if suffixes.iter().any(String::is_empty) {
            debug!("Empty suffix in {:?}, not filtering {}", suffixes, name);
            return Ok(SearchOutcome::Unfiltered);
        }

        let mut dirs = Vec::new();
        for dir in candidates {
            if match_in_dir(name, dir, suffixes).is_some() {
                dirs.push(dir.clone());
            }
        }

        debug!("Searched {} directories for {}: {} matches", candidates.len(), name, dirs.len());
        Ok(SearchOutcome::Dirs(dirs))
    }

    fn locate_first_match(
        &self,
        name: &str,
        dirs: &[String],
        suffixes: &[String],
    ) -> PathCacheResult<Option<PathBuf>> {
        for dir in dirs {
            if let Some(path) = match_in_dir(name, dir, suffixes) {
                return Ok(Some(path));
            }
        }
        Ok(None)
    }

    fn current_suffixes(&self) -> Vec<String> {
        self.suffixes.clone()
    }
}
