//! Durable cache file
//!
//! The cache is stored as a pretty-printed JSON object mapping each name to
//! either an array of directories or `null` for a tombstone:
//!
//! ```json
//! {
//!   "libfoo": ["/usr/lib"],
//!   "libmissing": null
//! }
//! ```
//!
//! Loading never fails. A missing, unreadable or corrupt file yields an
//! empty store. Writes go to a temporary file in the same directory which
//! is then renamed over the cache file, so a crash mid-write leaves the old
//! file intact.

use crate::cache::entry::CacheEntry;
use crate::cache::store::{has_path_separator, PrefixStore};
use crate::error::{PathCacheError, PathCacheResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// On-disk shape: name -> directories, `None` for a tombstone
type DurableForm = BTreeMap<String, Option<Vec<String>>>;

fn encode(store: &PrefixStore) -> DurableForm {
    store
        .iter()
        .filter_map(|(name, entry)| {
            let value = match entry {
                CacheEntry::Unknown => return None,
                CacheEntry::Tombstone => None,
                CacheEntry::Found(dirs) if dirs.is_empty() => None,
                CacheEntry::Found(dirs) => Some(dirs.clone()),
            };
            Some((name.to_string(), value))
        })
        .collect()
}

fn decode(form: DurableForm) -> PrefixStore {
    let mut store = PrefixStore::new();
    for (name, dirs) in form {
        if has_path_separator(&name) {
            debug!("Skipping cached name with path separator: {}", name);
            continue;
        }
        let entry = match dirs {
            Some(dirs) => CacheEntry::from_dirs(dirs),
            None => CacheEntry::Tombstone,
        };
        store.insert(&name, entry);
    }
    store
}

/// Parse the durable form from text
pub fn parse(content: &str) -> PathCacheResult<PrefixStore> {
    let form: DurableForm = serde_json::from_str(content)?;
    Ok(decode(form))
}

/// Render the durable form as text
pub fn render(store: &PrefixStore) -> PathCacheResult<String> {
    let mut content = serde_json::to_string_pretty(&encode(store))?;
    content.push('\n');
    Ok(content)
}

/// Load the cache file, returning an empty store on any failure
pub fn load(path: &Path) -> PrefixStore {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Cache file {} not found, starting empty", path.display());
            return PrefixStore::new();
        }
        Err(e) => {
            warn!("Failed to read cache file {}: {}", path.display(), e);
            return PrefixStore::new();
        }
    };

    match parse(&content) {
        Ok(store) => {
            debug!("Loaded {} cache entries from {}", store.len(), path.display());
            store
        }
        Err(e) => {
            warn!("Discarding corrupt cache file {}: {}", path.display(), e);
            PrefixStore::new()
        }
    }
}

/// Write the cache file atomically
pub fn persist(path: &Path, store: &PrefixStore) -> PathCacheResult<()> {
    let content = render(store)?;

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| PathCacheError::cache_write(path, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| PathCacheError::cache_write(path, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| PathCacheError::cache_write(path, e))?;
    tmp.persist(path)
        .map_err(|e| PathCacheError::cache_write(path, e.error))?;

    info!("Wrote {} cache entries to {}", store.len(), path.display());
    Ok(())
}
