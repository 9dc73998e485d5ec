//! Resolution failures as values.
//!
//! A book that cannot be resolved — missing config, unreadable directory,
//! unparsable YAML — is not an exceptional condition for the shelf as a whole.
//! One broken book directory must never take down the listing of the rest,
//! and a broken chapter must never take down its book's preview. So failures
//! are caught at the unit boundary and carried as a plain value: a message
//! plus the path it's attributed to. Callers branch on `Result`, the error
//! never unwinds past the unit it belongs to.
//!
//! Chapter files with malformed names are *not* errors at all — they degrade
//! to excluded/unordered entries in [`crate::chapter`].

use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failed resolution of one book or chapter, attributed to a path.
///
/// Cheap to clone — [`crate::cache::ResolveCache`] stores and hands out
/// copies of cached failures just like cached successes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}: {}", .message, .path.display())]
pub struct BookError {
    /// Human-readable description of what went wrong.
    pub message: String,
    /// The directory or file the failure is attributed to.
    pub path: PathBuf,
}

impl BookError {
    pub fn new(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            message: message.into(),
            path: path.into(),
        }
    }

    /// No `config.yaml` / `config.yml` found in a book directory.
    pub fn missing_config(dir: &Path) -> Self {
        Self::new("missing configuration (config.yaml or config.yml)", dir)
    }

    /// A directory listing or file read failed.
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::new(format!("IO error: {source}"), path)
    }

    /// The config file exists but its YAML does not parse.
    pub fn parse(path: &Path, source: serde_yaml::Error) -> Self {
        Self::new(format!("invalid config: {source}"), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message_and_path() {
        let err = BookError::missing_config(Path::new("/shelf/broken"));
        let rendered = err.to_string();
        assert!(rendered.contains("missing configuration"));
        assert!(rendered.contains("/shelf/broken"));
    }

    #[test]
    fn io_error_keeps_source_description() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = BookError::io(Path::new("/shelf/a/config.yaml"), io);
        assert!(err.to_string().contains("gone"));
        assert_eq!(err.path, Path::new("/shelf/a/config.yaml"));
    }
}
