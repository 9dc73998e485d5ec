//! Filesystem gateway.
//!
//! All filesystem access goes through the [`FileGateway`] trait: a directory
//! listing (name + kind) and a text read. These two calls are the only
//! suspension points in the crate — everything downstream of them (ordering,
//! config merging, cache keys) is pure, synchronous computation. Keeping the
//! seam this narrow lets tests substitute an in-memory tree and lets a host
//! back the shelf with a virtual filesystem instead of a real disk.
//!
//! [`LocalFs`] is the stock implementation over `tokio::fs`. It sorts entries
//! by name so listing order — which the shelf preserves in its output — is
//! deterministic across platforms.

use std::io;
use std::path::Path;

use async_trait::async_trait;

/// What a directory entry is, as far as resolution cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of a directory listing.
#[derive(Debug, Clone)]
pub struct DirEntry {
    /// Base name, no path components.
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Async access to a (possibly virtual) filesystem.
#[async_trait]
pub trait FileGateway: Send + Sync {
    /// List the immediate entries of a directory, sorted by name.
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Read a file's contents as UTF-8 text.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Local-disk gateway backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

#[async_trait]
impl FileGateway for LocalFs {
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut reader = tokio::fs::read_dir(path).await?;
        let mut entries = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            let file_type = entry.file_type().await?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(path).await
    }
}
