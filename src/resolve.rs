//! Book and chapter resolution: directory contents → validated value objects.
//!
//! Resolving a book reads its directory exactly once, classifies the entries
//! by name pattern, merges the parsed config with directory-derived defaults,
//! and assembles the sorted chapter sequence. The result depends only on the
//! directory contents and config text — re-resolving unchanged inputs yields
//! a structurally identical [`Book`], which is what makes the outcome safe to
//! cache (see [`crate::cache`]).
//!
//! ## Directory layout
//!
//! ```text
//! my-book/
//! ├── config.yaml        # required — absence fails resolution
//! ├── cover.png          # optional, first of cover.{png,jpg,jpeg,webp}
//! ├── 01.intro.md        # chapters: <integer>.<identifier>.md ...
//! ├── 02.setup.md
//! └── appendix.md        # ... or any name, excluded unless listed in config
//! ```
//!
//! Failures (no config, unreadable directory, unparsable YAML) surface as
//! [`BookError`] values attributed to the offending path, never as panics.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::chapter::{self, ChapterMeta};
use crate::config::{self, BookConfig};
use crate::error::BookError;
use crate::vfs::FileGateway;

/// Cover image: `cover.<ext>` with one of these extensions, exact match.
const COVER_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// A fully resolved book directory.
///
/// A value object: recreated on every resolution, never mutated in place.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    /// The book directory itself.
    pub dir: PathBuf,
    /// Display name: the directory's base name.
    pub name: String,
    /// The config file the record was read from.
    pub config_path: PathBuf,
    /// Cover image, if one was found.
    pub cover: Option<PathBuf>,
    /// Parsed config, with `slug` defaulted from the directory name.
    pub config: BookConfig,
    /// Chapters sorted ascending by order, excluded ones last.
    pub chapters: Vec<ChapterMeta>,
}

/// A resolved chapter file: its text plus an extracted display title.
#[derive(Debug, Clone, Serialize)]
pub struct ChapterDoc {
    pub path: PathBuf,
    /// First `# ` ATX heading, if any.
    pub title: Option<String>,
    /// Raw markdown text.
    pub body: String,
}

/// Resolve one book directory.
pub async fn resolve_book<G: FileGateway>(fs: &G, dir: &Path) -> Result<Book, BookError> {
    let entries = fs.read_dir(dir).await.map_err(|e| BookError::io(dir, e))?;

    let mut cover = None;
    let mut config_name = None;
    let mut chapter_files = Vec::new();
    for entry in &entries {
        if !entry.is_file() {
            continue;
        }
        if cover.is_none() && is_cover_name(&entry.name) {
            cover = Some(dir.join(&entry.name));
        }
        if config_name.is_none() && config::CONFIG_NAMES.contains(&entry.name.as_str()) {
            config_name = Some(entry.name.as_str());
        }
        if entry.name.ends_with(chapter::CHAPTER_EXTENSION) {
            chapter_files.push(dir.join(&entry.name));
        }
    }

    let config_path = dir.join(config_name.ok_or_else(|| BookError::missing_config(dir))?);
    let text = fs
        .read_to_string(&config_path)
        .await
        .map_err(|e| BookError::io(&config_path, e))?;
    let mut config = BookConfig::parse(&text).map_err(|e| BookError::parse(&config_path, e))?;

    // Directory name is the default slug; an explicit config slug wins.
    if config.slug.is_none() {
        config.slug = Some(dir_slug(dir));
    }

    let explicit = config.explicit_order();
    let mut chapters: Vec<ChapterMeta> = chapter_files
        .iter()
        .filter_map(|path| chapter::resolve_chapter(path, explicit))
        .collect();
    chapters.sort_by(|a, b| a.order.cmp(&b.order));

    debug!(
        book = %dir.display(),
        chapters = chapters.len(),
        cover = cover.is_some(),
        "resolved book"
    );

    Ok(Book {
        dir: dir.to_path_buf(),
        name: dir_name(dir),
        config_path,
        cover,
        config,
        chapters,
    })
}

/// Resolve one chapter file: read it and extract a display title.
pub async fn resolve_chapter_doc<G: FileGateway>(
    fs: &G,
    path: &Path,
) -> Result<ChapterDoc, BookError> {
    let body = fs
        .read_to_string(path)
        .await
        .map_err(|e| BookError::io(path, e))?;
    let title = extract_title(&body);
    Ok(ChapterDoc {
        path: path.to_path_buf(),
        title,
        body,
    })
}

fn is_cover_name(name: &str) -> bool {
    matches!(name.strip_prefix("cover."), Some(ext) if COVER_EXTENSIONS.contains(&ext))
}

/// Directory base name with any extension stripped — the default slug.
fn dir_slug(dir: &Path) -> String {
    dir.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Extract a display title: the first `# ` heading, trimmed.
fn extract_title(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .find(|line| line.starts_with("# "))
        .map(|line| line.trim_start_matches("# ").trim().to_string())
        .filter(|title| !title.is_empty())
}
