//! Cache context: store, existence memo and dirty flag

use crate::cache::compact::compact;
use crate::cache::entry::CacheEntry;
use crate::cache::memo::ExistenceMemo;
use crate::cache::persist;
use crate::cache::store::{has_path_separator, PrefixStore};
use crate::cache::validate::validate;
use crate::error::PathCacheResult;
use crate::search::{SearchHost, SearchOutcome};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Owns everything the cache mutates during a run.
///
/// Created once at startup and passed to every call site. Not internally
/// synchronized; share it across threads only behind a single mutex.
#[derive(Debug)]
pub struct PathCache {
    store: PrefixStore,
    memo: ExistenceMemo,
    dirty: bool,
    path: PathBuf,
}

impl PathCache {
    /// Load the cache file at `path` (empty on a missing or corrupt file)
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let store = persist::load(&path);
        Self::with_store(path, store)
    }

    /// Create a context around an existing store, marked clean
    pub fn with_store(path: impl Into<PathBuf>, store: PrefixStore) -> Self {
        Self {
            store,
            memo: ExistenceMemo::new(),
            dirty: false,
            path: path.into(),
        }
    }

    /// The live store
    pub fn store(&self) -> &PrefixStore {
        &self.store
    }

    /// Directories confirmed present so far
    pub fn memo(&self) -> &ExistenceMemo {
        &self.memo
    }

    /// Check if the store changed since load or the last successful write
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Cache file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `name` against `candidates`, consulting the cache first.
    ///
    /// Names with a path separator return the candidates unchanged. A valid
    /// entry answers without calling the host. Otherwise a stale entry is
    /// cleared, the host searches the full candidate list, and its answer
    /// is cached unless the host declined to filter.
    pub fn resolve<H: SearchHost + ?Sized>(
        &mut self,
        host: &H,
        name: &str,
        candidates: &[String],
        suffixes: &[String],
    ) -> PathCacheResult<Vec<String>> {
        if has_path_separator(name) {
            return Ok(candidates.to_vec());
        }

        let entry = self.store.lookup(name);
        if !entry.is_unknown() {
            if validate(&entry, candidates, &mut self.memo) {
                debug!("Cache hit for {}: {}", name, entry);
                return Ok(entry.dirs().to_vec());
            }

            debug!("Cache entry for {} is stale: {}", name, entry);
            if self.store.insert(name, CacheEntry::Unknown) {
                self.dirty = true;
            }
        }

        match host.default_search(candidates, name, suffixes)? {
            SearchOutcome::Unfiltered => {
                debug!("Search declined to filter {}, not caching", name);
                Ok(candidates.to_vec())
            }
            SearchOutcome::Dirs(dirs) => {
                debug!("Cache miss for {}: found in {} directories", name, dirs.len());
                if self.store.insert(name, CacheEntry::from_dirs(dirs.clone())) {
                    self.dirty = true;
                }
                Ok(dirs)
            }
        }
    }

    /// Persist the compacted cache if anything changed.
    ///
    /// Returns whether the file was written. The dirty flag is only cleared
    /// on success; the live store keeps its full entries.
    pub fn write_cache<H: SearchHost + ?Sized>(&mut self, host: &H) -> PathCacheResult<bool> {
        if self.store.is_empty() || !self.dirty {
            debug!("Cache unchanged, skipping write");
            return Ok(false);
        }

        self.persist_compacted(host)?;
        Ok(true)
    }

    /// Compact and persist regardless of the dirty flag, returning what was written
    pub fn compact_now<H: SearchHost + ?Sized>(&mut self, host: &H) -> PathCacheResult<PrefixStore> {
        self.persist_compacted(host)
    }

    /// Compaction preview without touching the disk
    pub fn compacted<H: SearchHost + ?Sized>(&self, host: &H) -> PathCacheResult<PrefixStore> {
        compact(&self.store, host, &host.current_suffixes())
    }

    fn persist_compacted<H: SearchHost + ?Sized>(&mut self, host: &H) -> PathCacheResult<PrefixStore> {
        let compacted = self.compacted(host)?;
        persist::persist(&self.path, &compacted)?;
        self.dirty = false;
        Ok(compacted)
    }

    /// Empty the cache and immediately write the empty store to disk
    pub fn clear_cache(&mut self) -> PathCacheResult<()> {
        self.store.clear();
        self.dirty = false;
        persist::persist(&self.path, &self.store)?;
        info!("Cleared cache at {}", self.path.display());
        Ok(())
    }
}
