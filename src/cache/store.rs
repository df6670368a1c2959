//! Name-keyed store of cache entries
//!
//! Keys are bare file names. Names containing a path separator bypass the
//! cache entirely and are never stored. Iteration is in key order so
//! compaction and listings are deterministic.

use crate::cache::entry::CacheEntry;
use std::collections::BTreeMap;
use tracing::debug;

/// Check if a name contains a path separator
pub fn has_path_separator(name: &str) -> bool {
    name.chars().any(std::path::is_separator)
}

/// Mapping from name to its cache entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixStore {
    entries: BTreeMap<String, CacheEntry>,
}

impl PrefixStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a name, returning `Unknown` if nothing is recorded
    pub fn lookup(&self, name: &str) -> CacheEntry {
        self.entries
            .get(name)
            .cloned()
            .unwrap_or(CacheEntry::Unknown)
    }

    /// Record an entry for a name.
    ///
    /// Inserting `Unknown` removes the name; an empty `Found` is stored as a
    /// tombstone. Returns whether the store changed. Names with a path
    /// separator are refused.
    pub fn insert(&mut self, name: &str, entry: CacheEntry) -> bool {
        if has_path_separator(name) {
            debug!("Refusing to cache name with path separator: {}", name);
            return false;
        }

        match entry {
            CacheEntry::Unknown => self.entries.remove(name).is_some(),
            CacheEntry::Tombstone => self.put(name, CacheEntry::Tombstone),
            CacheEntry::Found(dirs) => self.put(name, CacheEntry::from_dirs(dirs)),
        }
    }

    fn put(&mut self, name: &str, entry: CacheEntry) -> bool {
        let previous = self.entries.insert(name.to_string(), entry.clone());
        previous.as_ref() != Some(&entry)
    }

    /// Iterate over all `(name, entry)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CacheEntry)> + '_ {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of stored names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
