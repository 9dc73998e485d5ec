//! Resolution outcome cache.
//!
//! Resolving a book or chapter touches the filesystem, so the outcome is
//! memoized per logical resource: the key is (content kind, canonical path
//! string), the value is whatever the resolution produced — success *or*
//! failure. Caching the failure matters: a directory that permanently lacks
//! its config would otherwise be re-resolved on every refresh of the host UI.
//!
//! The only invalidation mechanism is the caller-supplied `force` flag; there
//! is no TTL and no file watching here — reacting to file changes is the
//! host's job, and it does so by passing `force = true`.
//!
//! Kinds keep keys disjoint: "book at path X" and "chapter at path X" are
//! different entries even for the same physical path. The store is shared
//! mutable state for the lifetime of the owning [`crate::shelf::Shelf`]; two
//! concurrent misses for one key both compute and the last writer wins, which
//! is sound because resolution is a pure function of current filesystem state.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::error::BookError;
use crate::resolve::{Book, ChapterDoc};

/// The kind of content a cache entry holds. Part of the key, so distinct
/// kinds never collide even when applied to the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Book,
    Chapter,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Book => f.write_str("book"),
            Self::Chapter => f.write_str("chapter"),
        }
    }
}

/// Cache key: content kind plus the resource's canonical path string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub kind: ContentKind,
    pub id: String,
}

impl CacheKey {
    pub fn new(kind: ContentKind, path: &Path) -> Self {
        Self {
            kind,
            id: path.to_string_lossy().into_owned(),
        }
    }
}

/// A successfully resolved resource, shared out of the cache behind `Arc`.
#[derive(Debug, Clone)]
pub enum Resolved {
    Book(Arc<Book>),
    Chapter(Arc<ChapterDoc>),
}

/// What the cache stores and returns: resolution outcome, either way.
pub type Outcome = Result<Resolved, BookError>;

/// Memoizes resolution outcomes per [`CacheKey`].
#[derive(Default)]
pub struct ResolveCache {
    entries: Mutex<HashMap<CacheKey, Outcome>>,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached outcome for `key`, or run `compute` and cache its
    /// result. With `force`, always recompute and overwrite.
    ///
    /// The lock is released before `compute` runs: a second miss for the same
    /// key while one is in flight computes independently (no single-flight
    /// coalescing), and the later store wins.
    pub async fn get_or_compute<F, Fut>(&self, key: CacheKey, force: bool, compute: F) -> Outcome
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Outcome>,
    {
        if !force {
            if let Some(hit) = self.entries.lock().await.get(&key) {
                debug!(kind = %key.kind, id = %key.id, "cache hit");
                return hit.clone();
            }
        }

        let outcome = compute().await;
        debug!(kind = %key.kind, id = %key.id, ok = outcome.is_ok(), force, "cache store");
        self.entries.lock().await.insert(key, outcome.clone());
        outcome
    }
}
