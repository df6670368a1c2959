//! Pre-persist compaction
//!
//! Re-verifies each entry against the filesystem through the host and
//! shrinks it to the single directory that actually holds the file:
//!
//! | Entry | Result |
//! |-------|--------|
//! | Tombstone | dropped (tombstones are never persisted) |
//! | Found, nothing resolves | dropped |
//! | Found, resolves in a directory already claimed | dropped (first wins) |
//! | Found, resolves | kept as `Found([dir])` |

use crate::cache::entry::CacheEntry;
use crate::cache::store::PrefixStore;
use crate::error::PathCacheResult;
use crate::search::SearchHost;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Build the compacted store that gets written to disk.
///
/// The live store is left untouched. Search failures from the host
/// propagate unchanged.
pub fn compact<H: SearchHost + ?Sized>(
    store: &PrefixStore,
    host: &H,
    suffixes: &[String],
) -> PathCacheResult<PrefixStore> {
    let mut compacted = PrefixStore::new();
    let mut claimed: HashSet<String> = HashSet::new();

    for (name, entry) in store.iter() {
        let dirs = match entry {
            CacheEntry::Found(dirs) if !dirs.is_empty() => dirs,
            _ => {
                debug!("Compaction drops tombstone {}", name);
                continue;
            }
        };

        let Some(file) = host.locate_first_match(name, dirs, suffixes)? else {
            debug!("Compaction drops {}: no longer found", name);
            continue;
        };

        let Some(dir) = owning_dir(dirs, &file) else {
            debug!("Compaction drops {}: {} has no parent", name, file.display());
            continue;
        };

        if !claimed.insert(dir.clone()) {
            debug!("Compaction drops {}: {} already claimed", name, dir);
            continue;
        }

        compacted.insert(name, CacheEntry::Found(vec![dir]));
    }

    debug!("Compacted {} entries down to {}", store.len(), compacted.len());
    Ok(compacted)
}

/// Directory holding `file`, spelled the way the entry spelled it if possible
fn owning_dir(dirs: &[String], file: &Path) -> Option<String> {
    let parent = file.parent()?;
    let dir = dirs
        .iter()
        .find(|d| Path::new(d.as_str()) == parent)
        .cloned()
        .unwrap_or_else(|| parent.to_string_lossy().into_owned());
    Some(dir)
}
