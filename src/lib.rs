//! pathcache - Persistent search-path lookup cache
//!
//! Remembers which directories of a search path contain a file, validates
//! those answers cheaply before trusting them, and repairs itself lazily
//! when the directory set changes.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod hook;
pub mod search;
pub mod ui;

pub use cache::{CacheEntry, PathCache, PrefixStore};
pub use error::{PathCacheError, PathCacheResult};
pub use hook::{setup, Filter};
pub use search::{FsSearchHost, SearchHost, SearchOutcome};
