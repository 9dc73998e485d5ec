//! Chapter identity, ordering, and inclusion derived from file names.
//!
//! A chapter is one markdown file inside a book directory. Its identifier,
//! position, and inclusion status come from one of two conventions:
//!
//! - **Explicit list**: the book's config declares `chapters: [intro, setup]`.
//!   A chapter whose extension-stripped name appears in the list takes its
//!   zero-based position as its order; one that doesn't is excluded. Robust
//!   to file renumbering — authors reorder by editing one list.
//! - **Filename convention**: with no list, a name like `01.intro.md` encodes
//!   order and identifier directly: `<integer>.<identifier>.md`. Zero config,
//!   but renames change ordering. Any other shape (`notes.md`,
//!   `1.two.parts.md`) is malformed — not an error, just excluded and sorted
//!   after everything ordered, keeping the whole stem as its identifier.
//!
//! Both conventions must work without a config migration, so the resolver
//! takes the explicit list as an optional argument and falls back.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Recognized chapter file extension, matched case-sensitively.
pub const CHAPTER_EXTENSION: &str = ".md";

/// A chapter's position within its book.
///
/// `Unordered` compares strictly greater than every `Ordered(n)`, so a plain
/// ascending sort puts every excluded chapter after every ordered one — no
/// magic sentinel integer involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChapterOrder {
    Ordered(i64),
    Unordered,
}

impl Ord for ChapterOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Ordered(a), Self::Ordered(b)) => a.cmp(b),
            (Self::Ordered(_), Self::Unordered) => Ordering::Less,
            (Self::Unordered, Self::Ordered(_)) => Ordering::Greater,
            (Self::Unordered, Self::Unordered) => Ordering::Equal,
        }
    }
}

impl PartialOrd for ChapterOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Identity and position of one chapter file.
///
/// A value object, rebuilt on every resolution. Identifiers are *not*
/// deduplicated at this layer — two files can legitimately resolve to the
/// same identifier and both are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterMeta {
    /// Identifier derived from the file name (extension stripped).
    pub id: String,
    /// The chapter file itself.
    pub path: PathBuf,
    pub order: ChapterOrder,
}

impl ChapterMeta {
    /// Whether this chapter is excluded from the ordered sequence.
    /// Holds exactly when `order` is `Unordered`, by construction.
    pub fn excluded(&self) -> bool {
        self.order == ChapterOrder::Unordered
    }
}

/// Derive a chapter's metadata from its file name.
///
/// Returns `None` when no identifier can be derived — an empty base name
/// after stripping the `.md` extension (e.g. a bare `.md` file).
///
/// With a non-empty `explicit` list, the list is authoritative: position in
/// the list is the order, absence means excluded. Without one, the
/// `<integer>.<identifier>.md` convention applies; names that don't match it
/// yield an excluded chapter whose identifier is the whole stem.
pub fn resolve_chapter(path: &Path, explicit: Option<&[String]>) -> Option<ChapterMeta> {
    let name = path.file_name()?.to_str()?;
    let stem = name.strip_suffix(CHAPTER_EXTENSION).unwrap_or(name);
    if stem.is_empty() {
        return None;
    }

    if let Some(list) = explicit.filter(|l| !l.is_empty()) {
        let order = match list.iter().position(|id| id == stem) {
            Some(pos) => ChapterOrder::Ordered(pos as i64),
            None => ChapterOrder::Unordered,
        };
        return Some(ChapterMeta {
            id: stem.to_string(),
            path: path.to_path_buf(),
            order,
        });
    }

    let parts: Vec<&str> = stem.split('.').collect();
    if parts.len() == 2
        && let Ok(number) = parts[0].parse::<i64>()
    {
        return Some(ChapterMeta {
            id: parts[1].to_string(),
            path: path.to_path_buf(),
            order: ChapterOrder::Ordered(number),
        });
    }

    // Malformed name: keep the file, push it past everything ordered.
    Some(ChapterMeta {
        id: stem.to_string(),
        path: path.to_path_buf(),
        order: ChapterOrder::Unordered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(name: &str, explicit: Option<&[String]>) -> Option<ChapterMeta> {
        resolve_chapter(Path::new(name), explicit)
    }

    // =========================================================================
    // Filename convention (no explicit list)
    // =========================================================================

    #[test]
    fn numbered_name_yields_ordered_chapter() {
        let ch = chapter("01.intro.md", None).unwrap();
        assert_eq!(ch.id, "intro");
        assert_eq!(ch.order, ChapterOrder::Ordered(1));
        assert!(!ch.excluded());
    }

    #[test]
    fn number_need_not_be_zero_padded() {
        let ch = chapter("12.closures.md", None).unwrap();
        assert_eq!(ch.order, ChapterOrder::Ordered(12));
    }

    #[test]
    fn plain_name_is_excluded_with_full_stem_as_id() {
        let ch = chapter("notes.md", None).unwrap();
        assert_eq!(ch.id, "notes");
        assert_eq!(ch.order, ChapterOrder::Unordered);
        assert!(ch.excluded());
    }

    #[test]
    fn three_segments_is_malformed() {
        let ch = chapter("1.two.parts.md", None).unwrap();
        assert_eq!(ch.id, "1.two.parts");
        assert!(ch.excluded());
    }

    #[test]
    fn non_integer_prefix_is_malformed() {
        let ch = chapter("one.intro.md", None).unwrap();
        assert_eq!(ch.id, "one.intro");
        assert!(ch.excluded());
    }

    #[test]
    fn empty_stem_yields_none() {
        assert_eq!(chapter(".md", None), None);
    }

    // =========================================================================
    // Explicit order list
    // =========================================================================

    #[test]
    fn explicit_list_positions_win() {
        let list = vec!["intro".to_string(), "setup".to_string()];
        let intro = chapter("intro.md", Some(&list)).unwrap();
        let setup = chapter("setup.md", Some(&list)).unwrap();
        assert_eq!(intro.order, ChapterOrder::Ordered(0));
        assert_eq!(setup.order, ChapterOrder::Ordered(1));
    }

    #[test]
    fn unlisted_chapter_is_excluded() {
        let list = vec!["intro".to_string(), "setup".to_string()];
        let ch = chapter("a.md", Some(&list)).unwrap();
        assert_eq!(ch.id, "a");
        assert!(ch.excluded());
    }

    #[test]
    fn explicit_list_ignores_numeric_filename_convention() {
        // The list addresses the full stem, so "01.intro" (not "intro")
        // is what would have to appear in it.
        let list = vec!["intro".to_string()];
        let ch = chapter("01.intro.md", Some(&list)).unwrap();
        assert_eq!(ch.id, "01.intro");
        assert!(ch.excluded());
    }

    #[test]
    fn empty_explicit_list_falls_back_to_filename_convention() {
        let list: Vec<String> = vec![];
        let ch = chapter("01.intro.md", Some(&list)).unwrap();
        assert_eq!(ch.order, ChapterOrder::Ordered(1));
        assert_eq!(ch.id, "intro");
    }

    // =========================================================================
    // ChapterOrder comparator
    // =========================================================================

    #[test]
    fn unordered_sorts_after_any_ordered() {
        assert!(ChapterOrder::Ordered(i64::MAX) < ChapterOrder::Unordered);
        assert!(ChapterOrder::Unordered > ChapterOrder::Ordered(0));
        assert_eq!(
            ChapterOrder::Unordered.cmp(&ChapterOrder::Unordered),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn ordered_compares_by_number() {
        assert!(ChapterOrder::Ordered(1) < ChapterOrder::Ordered(2));
        assert!(ChapterOrder::Ordered(-1) < ChapterOrder::Ordered(0));
    }
}
