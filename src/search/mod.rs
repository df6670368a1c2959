//! Authoritative search collaborators
//!
//! The cache never decides where a file lives. It asks a [`SearchHost`],
//! which owns the real (uncached) search, and only remembers the answers.

pub mod fs;

pub use self::fs::FsSearchHost;

use crate::error::PathCacheResult;
use std::path::PathBuf;

/// Result of an authoritative directory search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search does not apply to this lookup; use the candidates as-is
    /// and do not cache anything
    Unfiltered,
    /// Directories containing a match, in candidate order (may be empty)
    Dirs(Vec<String>),
}

/// Host environment providing the uncached search operations
pub trait SearchHost {
    /// Find every candidate directory containing `name` with one of `suffixes`
    fn default_search(
        &self,
        candidates: &[String],
        name: &str,
        suffixes: &[String],
    ) -> PathCacheResult<SearchOutcome>;

    /// Find the first file matching `name` in `dirs`, honoring directory order
    fn locate_first_match(
        &self,
        name: &str,
        dirs: &[String],
        suffixes: &[String],
    ) -> PathCacheResult<Option<PathBuf>>;

    /// Suffixes currently tried, in order
    fn current_suffixes(&self) -> Vec<String>;

    /// Whether the host lets a cached filter and exit hook be installed
    fn supports_hooks(&self) -> bool {
        true
    }
}

impl<T: SearchHost + ?Sized> SearchHost for &T {
    fn default_search(
        &self,
        candidates: &[String],
        name: &str,
        suffixes: &[String],
    ) -> PathCacheResult<SearchOutcome> {
        (**self).default_search(candidates, name, suffixes)
    }

    fn locate_first_match(
        &self,
        name: &str,
        dirs: &[String],
        suffixes: &[String],
    ) -> PathCacheResult<Option<PathBuf>> {
        (**self).locate_first_match(name, dirs, suffixes)
    }

    fn current_suffixes(&self) -> Vec<String> {
        (**self).current_suffixes()
    }

    fn supports_hooks(&self) -> bool {
        (**self).supports_hooks()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted host for exercising the cache without a filesystem

    use super::*;
    use crate::error::PathCacheError;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// Host whose answers come from a table of `name -> directories`
    #[derive(Default)]
    pub struct ScriptedHost {
        /// Directories that contain each name
        pub files: RefCell<HashMap<String, Vec<String>>>,
        /// Suffixes reported by `current_suffixes`
        pub suffixes: Vec<String>,
        /// Names whose search should fail
        pub failing: Vec<String>,
        /// Report hooks as unavailable
        pub no_hooks: bool,
        /// Number of `default_search` calls
        pub searches: Cell<usize>,
        /// Number of `locate_first_match` calls
        pub locates: Cell<usize>,
    }

    impl ScriptedHost {
        pub fn new() -> Self {
            Self {
                suffixes: vec![".so".to_string()],
                ..Self::default()
            }
        }

        pub fn with_file(self, name: &str, dirs: &[&str]) -> Self {
            self.place(name, dirs);
            self
        }

        pub fn place(&self, name: &str, dirs: &[&str]) {
            self.files.borrow_mut().insert(
                name.to_string(),
                dirs.iter().map(|d| d.to_string()).collect(),
            );
        }
    }

    impl SearchHost for ScriptedHost {
        fn default_search(
            &self,
            candidates: &[String],
            name: &str,
            suffixes: &[String],
        ) -> PathCacheResult<SearchOutcome> {
            self.searches.set(self.searches.get() + 1);
            if self.failing.iter().any(|n| n == name) {
                return Err(PathCacheError::search(name, "scripted failure"));
            }
            if suffixes.iter().any(String::is_empty) {
                return Ok(SearchOutcome::Unfiltered);
            }
            let files = self.files.borrow();
            let homes = files.get(name).cloned().unwrap_or_default();
            Ok(SearchOutcome::Dirs(
                candidates
                    .iter()
                    .filter(|c| homes.contains(*c))
                    .cloned()
                    .collect(),
            ))
        }

        fn locate_first_match(
            &self,
            name: &str,
            dirs: &[String],
            suffixes: &[String],
        ) -> PathCacheResult<Option<PathBuf>> {
            self.locates.set(self.locates.get() + 1);
            if self.failing.iter().any(|n| n == name) {
                return Err(PathCacheError::search(name, "scripted failure"));
            }
            let files = self.files.borrow();
            let Some(homes) = files.get(name) else {
                return Ok(None);
            };
            let suffix = suffixes.first().cloned().unwrap_or_default();
            Ok(dirs
                .iter()
                .find(|d| homes.contains(*d))
                .map(|d| PathBuf::from(d).join(format!("{}{}", name, suffix))))
        }

        fn current_suffixes(&self) -> Vec<String> {
            self.suffixes.clone()
        }

        fn supports_hooks(&self) -> bool {
            !self.no_hooks
        }
    }
}
