//! Cache entry states

use std::fmt;

/// What the cache knows about one name.
///
/// `Found` never holds an empty list once it has gone through
/// [`CacheEntry::from_dirs`]; an empty search result is a `Tombstone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheEntry {
    /// Nothing recorded for this name
    Unknown,
    /// Previously verified to match in none of the directories seen so far
    Tombstone,
    /// Directories containing the name, most preferred first
    Found(Vec<String>),
}

impl CacheEntry {
    /// Build an entry from a search result, folding an empty result into a tombstone
    pub fn from_dirs(dirs: Vec<String>) -> Self {
        if dirs.is_empty() {
            Self::Tombstone
        } else {
            Self::Found(dirs)
        }
    }

    /// Check if nothing is recorded
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Check if this entry records "matches nothing" (including `Found([])`)
    pub fn is_tombstone(&self) -> bool {
        match self {
            Self::Tombstone => true,
            Self::Found(dirs) => dirs.is_empty(),
            Self::Unknown => false,
        }
    }

    /// Directories recorded for this entry (empty for tombstones and unknowns)
    pub fn dirs(&self) -> &[String] {
        match self {
            Self::Found(dirs) => dirs,
            Self::Tombstone | Self::Unknown => &[],
        }
    }
}

impl fmt::Display for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Tombstone => write!(f, "tombstone"),
            Self::Found(dirs) if dirs.is_empty() => write!(f, "tombstone"),
            Self::Found(dirs) => write!(f, "{}", dirs.join(", ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_becomes_tombstone() {
        assert_eq!(CacheEntry::from_dirs(vec![]), CacheEntry::Tombstone);
        assert_eq!(
            CacheEntry::from_dirs(vec!["/b".to_string()]),
            CacheEntry::Found(vec!["/b".to_string()])
        );
    }

    #[test]
    fn empty_found_is_a_tombstone() {
        assert!(CacheEntry::Found(vec![]).is_tombstone());
        assert!(CacheEntry::Tombstone.is_tombstone());
        assert!(!CacheEntry::Unknown.is_tombstone());
        assert!(!CacheEntry::Found(vec!["/a".to_string()]).is_tombstone());
    }

    #[test]
    fn entry_display() {
        assert_eq!(CacheEntry::Tombstone.to_string(), "tombstone");
        assert_eq!(CacheEntry::Found(vec![]).to_string(), "tombstone");
        assert_eq!(
            CacheEntry::Found(vec!["/a".to_string(), "/b".to_string()]).to_string(),
            "/a, /b"
        );
    }
}
