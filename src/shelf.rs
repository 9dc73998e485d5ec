//! The shelf: every book under a content root, resolved through one cache.
//!
//! A [`Shelf`] owns a [`FileGateway`] and a [`ResolveCache`] and is the entry
//! point hosts use. Listing a root resolves all of its immediate
//! subdirectories concurrently — fan-out is uncapped because a shelf holds
//! tens of books, not thousands — and a failure in one book never prevents
//! the others from resolving: the listing has exactly one entry per
//! subdirectory, each a resolved [`Book`] or a [`BookError`], in listing
//! order regardless of which resolution finished first.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use crate::cache::{CacheKey, ContentKind, Resolved, ResolveCache};
use crate::error::BookError;
use crate::resolve::{self, Book, ChapterDoc};
use crate::vfs::FileGateway;

/// Cached access to every book and chapter under some filesystem gateway.
pub struct Shelf<G> {
    fs: G,
    cache: ResolveCache,
}

impl<G: FileGateway> Shelf<G> {
    pub fn new(fs: G) -> Self {
        Self {
            fs,
            cache: ResolveCache::new(),
        }
    }

    /// Resolve one book directory through the cache.
    pub async fn book(&self, dir: &Path, force: bool) -> Result<Arc<Book>, BookError> {
        let key = CacheKey::new(ContentKind::Book, dir);
        let resolved = self
            .cache
            .get_or_compute(key, force, || async move {
                resolve::resolve_book(&self.fs, dir)
                    .await
                    .map(|book| Resolved::Book(Arc::new(book)))
            })
            .await?;
        match resolved {
            Resolved::Book(book) => Ok(book),
            Resolved::Chapter(_) => unreachable!("book key resolved to a chapter"),
        }
    }

    /// Resolve one chapter file through the cache.
    pub async fn chapter(&self, path: &Path, force: bool) -> Result<Arc<ChapterDoc>, BookError> {
        let key = CacheKey::new(ContentKind::Chapter, path);
        let resolved = self
            .cache
            .get_or_compute(key, force, || async move {
                resolve::resolve_chapter_doc(&self.fs, path)
                    .await
                    .map(|doc| Resolved::Chapter(Arc::new(doc)))
            })
            .await?;
        match resolved {
            Resolved::Chapter(doc) => Ok(doc),
            Resolved::Book(_) => unreachable!("chapter key resolved to a book"),
        }
    }

    /// Resolve every immediate subdirectory of `root` as a book.
    ///
    /// Fails only if the root itself cannot be listed. Otherwise returns one
    /// outcome per subdirectory, in listing order.
    pub async fn books(
        &self,
        root: &Path,
        force: bool,
    ) -> Result<Vec<Result<Arc<Book>, BookError>>, BookError> {
        let entries = self
            .fs
            .read_dir(root)
            .await
            .map_err(|e| BookError::io(root, e))?;
        let dirs: Vec<PathBuf> = entries
            .iter()
            .filter(|e| e.is_dir())
            .map(|e| root.join(&e.name))
            .collect();

        info!(root = %root.display(), books = dirs.len(), force, "resolving shelf");
        let results = join_all(dirs.iter().map(|dir| self.book(dir, force))).await;

        for outcome in &results {
            if let Err(err) = outcome {
                warn!(%err, "book failed to resolve");
            }
        }
        Ok(results)
    }
}
