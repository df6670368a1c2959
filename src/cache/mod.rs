//! Persistent name-to-directory lookup cache
//!
//! Remembers which directories of a search path contain a given file name,
//! across process restarts.
//!
//! # Entry States
//!
//! | State | Meaning | Validates |
//! |-------|---------|-----------|
//! | Unknown | nothing recorded | never |
//! | Tombstone | matched nowhere | always, until cleared |
//! | Found(dirs) | matched in `dirs` | if every dir is memoized or a candidate |
//!
//! # Tradeoffs
//!
//! - Directories memoized as present are trusted for the rest of the run,
//!   even if they disappear.
//! - Tombstones are trusted in memory until an explicit clear, but are
//!   dropped on persist, so a fresh process re-learns them.
//! - Shrinking the directory set can leave stale answers for memoized
//!   directories; clearing the cache is the remedy.

pub mod compact;
pub mod context;
pub mod entry;
pub mod memo;
pub mod persist;
pub mod store;
pub mod validate;

pub use compact::compact;
pub use context::PathCache;
pub use entry::CacheEntry;
pub use memo::ExistenceMemo;
pub use store::{has_path_separator, PrefixStore};
pub use validate::validate;
