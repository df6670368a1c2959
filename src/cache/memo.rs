//! Directories confirmed present during this run
//!
//! The memo only grows. A directory removed after it was recorded is still
//! trusted until the process exits.

use std::collections::HashSet;

/// Set of directories already seen in some candidate list
#[derive(Debug, Clone, Default)]
pub struct ExistenceMemo {
    dirs: HashSet<String>,
}

impl ExistenceMemo {
    /// Create an empty memo
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a directory has been confirmed
    pub fn contains(&self, dir: &str) -> bool {
        self.dirs.contains(dir)
    }

    /// Record a directory as confirmed
    pub fn record(&mut self, dir: &str) {
        // Look up first so a repeat confirmation does not allocate
        if !self.dirs.contains(dir) {
            self.dirs.insert(dir.to_string());
        }
    }

    /// Number of confirmed directories
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Check if nothing has been confirmed yet
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_are_idempotent() {
        let mut memo = ExistenceMemo::new();
        assert!(memo.is_empty());

        memo.record("/usr/lib");
        memo.record("/usr/lib");

        assert!(memo.contains("/usr/lib"));
        assert!(!memo.contains("/usr/local/lib"));
        assert_eq!(memo.len(), 1);
    }
}
