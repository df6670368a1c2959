//! Cache hit validation
//!
//! Decides whether a stored entry can be trusted for the current candidate
//! list using in-memory checks only; nothing here touches the filesystem.

use crate::cache::entry::CacheEntry;
use crate::cache::memo::ExistenceMemo;

/// Check if `entry` is still trustworthy for `candidates`.
///
/// - `Unknown` never validates.
/// - Tombstones (and `Found([])`) always validate, whatever the candidates.
/// - `Found(dirs)` validates iff every directory is either memoized or a
///   member of `candidates`. Directories confirmed by membership are added
///   to the memo as they are checked, and stay there even if a later
///   directory fails.
pub fn validate(entry: &CacheEntry, candidates: &[String], memo: &mut ExistenceMemo) -> bool {
    match entry {
        CacheEntry::Unknown => false,
        CacheEntry::Tombstone => true,
        CacheEntry::Found(dirs) => dirs.iter().all(|dir| {
            if memo.contains(dir) {
                return true;
            }
            if candidates.iter().any(|candidate| candidate == dir) {
                memo.record(dir);
                return true;
            }
            false
        }),
    }
}
