//! Location snapshots and the provider seam

use crate::params::QueryParams;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// A snapshot of a location: path plus query parameters
///
/// Snapshots are plain data. The live location is only ever changed by
/// replacing it wholesale through a [`LocationProvider`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Path portion, e.g. `/library`
    pub path: String,
    /// Query parameters in insertion order
    pub params: QueryParams,
}

impl Location {
    /// Create a location with an empty query string
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: QueryParams::new(),
        }
    }

    /// Parse a URL of the form `path` or `path?query`
    pub fn parse(url: &str) -> Self {
        match url.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                params: QueryParams::parse(query),
            },
            None => Self::new(url),
        }
    }

    /// Serialize back to `path` or `path?query`
    pub fn to_url(&self) -> String {
        if self.params.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.params)
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_url())
    }
}

/// Read and replace access to a shared location
///
/// `path()` and `params()` return snapshots of the current state; `replace`
/// swaps the whole location in one indivisible update (replace-style
/// navigation: no history entry is created). Implementations must make each
/// replace visible to subsequent reads.
pub trait LocationProvider: Send + Sync {
    /// Current path portion
    fn path(&self) -> String;

    /// Snapshot of the current query parameters
    fn params(&self) -> QueryParams;

    /// Replace the location with the given URL (fire-and-forget)
    fn replace(&self, url: &str);

    /// Atomically derive and apply a replacement
    ///
    /// The closure sees the current location and returns the replacement
    /// URL, or `None` to leave the location untouched. The read and the
    /// swap happen as one indivisible step: no other reader or writer can
    /// interleave between them. Committers use this instead of a separate
    /// `params()` read followed by `replace()`, which would let two
    /// concurrent commits derive from the same base and lose one of them.
    fn update(&self, apply: &mut dyn FnMut(&Location) -> Option<String>);
}

/// In-memory shared location
///
/// Cheap to clone; all clones observe the same location. Each `replace` is
/// a single atomic swap under the lock.
#[derive(Clone, Default)]
pub struct SharedLocation {
    inner: Arc<RwLock<Location>>,
}

impl SharedLocation {
    /// Create a location at `path` with no query parameters
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Location::new(path))),
        }
    }

    /// Create a location from a full URL (`path` or `path?query`)
    pub fn from_url(url: &str) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Location::parse(url))),
        }
    }

    /// Snapshot of the full location
    pub fn snapshot(&self) -> Location {
        self.inner.read().clone()
    }

    /// Current serialized URL
    pub fn url(&self) -> String {
        self.inner.read().to_url()
    }
}

impl LocationProvider for SharedLocation {
    fn path(&self) -> String {
        self.inner.read().path.clone()
    }

    fn params(&self) -> QueryParams {
        self.inner.read().params.clone()
    }

    fn replace(&self, url: &str) {
        let next = Location::parse(url);
        trace!(%url, "replacing location");
        *self.inner.write() = next;
    }

    fn update(&self, apply: &mut dyn FnMut(&Location) -> Option<String>) {
        // one write-lock acquisition covers both the read and the swap
        let mut guard = self.inner.write();
        if let Some(url) = apply(&guard) {
            trace!(%url, "replacing location");
            *guard = Location::parse(&url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_path_and_query() {
        let loc = Location::parse("/library?topic=cells&subject=science");
        assert_eq!(loc.path, "/library");
        assert_eq!(loc.params.get("topic"), Some("cells"));
        assert_eq!(loc.params.get("subject"), Some("science"));
    }

    #[test]
    fn test_parse_without_query() {
        let loc = Location::parse("/library");
        assert_eq!(loc.path, "/library");
        assert!(loc.params.is_empty());
    }

    #[test]
    fn test_to_url_omits_empty_query() {
        let loc = Location::new("/library");
        assert_eq!(loc.to_url(), "/library");
    }

    #[test]
    fn test_replace_swaps_whole_location() {
        let shared = SharedLocation::from_url("/library?topic=cells");
        shared.replace("/library?subject=science");

        let snap = shared.snapshot();
        assert_eq!(snap.params.get("topic"), None);
        assert_eq!(snap.params.get("subject"), Some("science"));
    }

    #[test]
    fn test_clones_share_state() {
        let a = SharedLocation::new("/library");
        let b = a.clone();

        a.replace("/library?topic=cells");
        assert_eq!(b.url(), "/library?topic=cells");
    }

    #[test]
    fn test_update_applies_returned_url() {
        let shared = SharedLocation::from_url("/library?topic=cells");
        shared.update(&mut |location| {
            let mut params = location.params.clone();
            params.set("subject", "science");
            Some(format!("{}?{}", location.path, params))
        });
        assert_eq!(shared.url(), "/library?topic=cells&subject=science");
    }

    #[test]
    fn test_update_with_none_leaves_location_untouched() {
        let shared = SharedLocation::from_url("/library?topic=cells");
        shared.update(&mut |_| None);
        assert_eq!(shared.url(), "/library?topic=cells");
    }

    #[test]
    fn test_replace_is_visible_to_subsequent_reads() {
        let shared = SharedLocation::new("/library");
        shared.replace("/library?page=2");
        assert_eq!(shared.params().get("page"), Some("2"));
        assert_eq!(shared.path(), "/library");
    }
}
