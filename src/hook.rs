//! Installing the cache into a host
//!
//! [`setup`] wraps a host's uncached search in a [`Filter`]. When caching is
//! available the filter answers through [`PathCache`] and writes the cache
//! back when it is dropped, which is the exit hook. A failed write at exit
//! is logged and never panics, so it cannot block shutdown.

use crate::cache::PathCache;
use crate::error::PathCacheResult;
use crate::search::{SearchHost, SearchOutcome};
use tracing::{debug, warn};

/// Host search with the cache installed in front of it
pub struct CachedSearch<H: SearchHost> {
    host: H,
    cache: PathCache,
    finished: bool,
}

impl<H: SearchHost> CachedSearch<H> {
    /// Resolve through the cache
    pub fn filter(
        &mut self,
        candidates: &[String],
        name: &str,
        suffixes: &[String],
    ) -> PathCacheResult<Vec<String>> {
        self.cache.resolve(&self.host, name, candidates, suffixes)
    }

    /// The cache context
    pub fn cache(&self) -> &PathCache {
        &self.cache
    }

    /// Mutable access to the cache context
    pub fn cache_mut(&mut self) -> &mut PathCache {
        &mut self.cache
    }

    /// Run the exit write now and report its result
    pub fn finish(mut self) -> PathCacheResult<bool> {
        self.finished = true;
        self.cache.write_cache(&self.host)
    }
}

impl<H: SearchHost> Drop for CachedSearch<H> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        if let Err(e) = self.cache.write_cache(&self.host) {
            warn!("Failed to write cache {}: {}", self.cache.path().display(), e);
        }
    }
}

/// The active filtering operation
pub enum Filter<H: SearchHost> {
    /// Cache installed
    Cached(CachedSearch<H>),
    /// Host search used directly
    Uncached(H),
}

impl<H: SearchHost> Filter<H> {
    /// Drop-in replacement for the host's default search.
    ///
    /// Returns the directories to search, or the candidates unchanged when
    /// the search declines to filter.
    pub fn filter(
        &mut self,
        candidates: &[String],
        name: &str,
        suffixes: &[String],
    ) -> PathCacheResult<Vec<String>> {
        match self {
            Self::Cached(cached) => cached.filter(candidates, name, suffixes),
            Self::Uncached(host) => match host.default_search(candidates, name, suffixes)? {
                SearchOutcome::Unfiltered => Ok(candidates.to_vec()),
                SearchOutcome::Dirs(dirs) => Ok(dirs),
            },
        }
    }

    /// The underlying host
    pub fn host(&self) -> &H {
        match self {
            Self::Cached(cached) => &cached.host,
            Self::Uncached(host) => host,
        }
    }

    /// The cache context, if installed
    pub fn cache(&self) -> Option<&PathCache> {
        match self {
            Self::Cached(cached) => Some(cached.cache()),
            Self::Uncached(_) => None,
        }
    }

    /// Check if the cache is installed
    pub fn is_cached(&self) -> bool {
        matches!(self, Self::Cached(_))
    }

    /// Run the exit write now (no-op without a cache)
    pub fn finish(self) -> PathCacheResult<bool> {
        match self {
            Self::Cached(cached) => cached.finish(),
            Self::Uncached(_) => Ok(false),
        }
    }
}

/// Install the cache in front of `host`.
///
/// Falls back to the plain host search when caching is disabled or the host
/// has no extension points for a filter and exit hook.
pub fn setup<H: SearchHost>(host: H, cache: PathCache, enabled: bool) -> Filter<H> {
    if !enabled {
        debug!("Path cache disabled by configuration");
        return Filter::Uncached(host);
    }
    if !host.supports_hooks() {
        debug!("Host exposes no filter hooks, path cache not installed");
        return Filter::Uncached(host);
    }

    debug!("Path cache installed ({} entries)", cache.store().len());
    Filter::Cached(CachedSearch {
        host,
        cache,
        finished: false,
    })
}
