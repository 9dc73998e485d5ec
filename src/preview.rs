//! Projection of a resolved book into a flat, UI-ready preview document.
//!
//! A preview is what the host panel renders: the book's metadata, a cover
//! path mapped into whatever address space the presentation context needs
//! (webview URI, relative href, plain path), and one entry per chapter with
//! its display title. Chapter titles come from each chapter's own cached
//! resolution; a chapter that fails to resolve degrades to a `None` title
//! instead of failing the preview. Only the book itself failing to resolve
//! aborts the projection — there is nothing to show for an unresolvable book.
//!
//! All chapters of a book resolve concurrently; the document's chapter order
//! is always the book's chapter order, never completion order.

use std::path::Path;

use futures::future::join_all;
use serde::Serialize;
use tracing::warn;

use crate::config::BookConfig;
use crate::error::BookError;
use crate::shelf::Shelf;
use crate::vfs::FileGateway;

/// Flat document handed to the presentation layer, serialized as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewDocument {
    /// Kind tag for the consuming panel. Always `"book"`.
    pub kind: &'static str,
    /// The book directory's name.
    pub name: String,
    /// Panel title: config title, falling back to the directory name.
    pub title: String,
    /// The merged config record.
    pub config: BookConfig,
    /// Mapped cover path; `None` when the book has no cover.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// One entry per chapter, in the book's chapter order.
    pub chapters: Vec<PreviewChapter>,
}

/// One chapter line of the preview.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewChapter {
    /// Mapped chapter path.
    pub path: String,
    /// Chapter identifier.
    pub id: String,
    /// Display title; `None` when the chapter had none or failed to resolve.
    pub title: Option<String>,
}

/// Project the book at `dir` into a [`PreviewDocument`].
///
/// `map_path` converts resource paths into presentation-context addresses;
/// it is applied to the cover and to every chapter path.
pub async fn project<G, M>(
    shelf: &Shelf<G>,
    dir: &Path,
    map_path: M,
    force: bool,
) -> Result<PreviewDocument, BookError>
where
    G: FileGateway,
    M: Fn(&Path) -> String,
{
    let book = shelf.book(dir, force).await?;

    let titles = join_all(book.chapters.iter().map(|meta| async move {
        match shelf.chapter(&meta.path, force).await {
            Ok(doc) => doc.title.clone(),
            Err(err) => {
                warn!(%err, "chapter failed to resolve, degrading to untitled");
                None
            }
        }
    }))
    .await;

    let chapters = book
        .chapters
        .iter()
        .zip(titles)
        .map(|(meta, title)| PreviewChapter {
            path: map_path(&meta.path),
            id: meta.id.clone(),
            title,
        })
        .collect();

    Ok(PreviewDocument {
        kind: "book",
        name: book.name.clone(),
        title: book
            .config
            .title
            .clone()
            .unwrap_or_else(|| book.name.clone()),
        config: book.config.clone(),
        cover: book.cover.as_deref().map(|p| map_path(p)),
        chapters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::LocalFs;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn display_path(path: &Path) -> String {
        path.display().to_string()
    }

    async fn project_dir(dir: &Path) -> Result<PreviewDocument, BookError> {
        let shelf = Shelf::new(LocalFs);
        project(&shelf, dir, display_path, false).await
    }

    fn write_book(tmp: &TempDir, config: &str, chapters: &[(&str, &str)]) -> PathBuf {
        let dir = tmp.path().join("guide");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yaml"), config).unwrap();
        for (name, body) in chapters {
            fs::write(dir.join(name), body).unwrap();
        }
        dir
    }

    #[tokio::test]
    async fn document_carries_titles_in_chapter_order() {
        let tmp = TempDir::new().unwrap();
        let dir = write_book(
            &tmp,
            "title: The Guide\n",
            &[
                ("02.setup.md", "# Setting Up\n"),
                ("01.intro.md", "# Welcome\n"),
            ],
        );

        let doc = project_dir(&dir).await.unwrap();
        assert_eq!(doc.kind, "book");
        assert_eq!(doc.title, "The Guide");
        let titles: Vec<Option<&str>> = doc.chapters.iter().map(|c| c.title.as_deref()).collect();
        assert_eq!(titles, vec![Some("Welcome"), Some("Setting Up")]);
        let ids: Vec<&str> = doc.chapters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["intro", "setup"]);
    }

    #[tokio::test]
    async fn panel_title_falls_back_to_directory_name() {
        let tmp = TempDir::new().unwrap();
        let dir = write_book(&tmp, "", &[]);

        let doc = project_dir(&dir).await.unwrap();
        assert_eq!(doc.title, "guide");
        assert_eq!(doc.name, "guide");
    }

    #[tokio::test]
    async fn cover_is_mapped_and_absence_is_none() {
        let tmp = TempDir::new().unwrap();
        let dir = write_book(&tmp, "", &[]);
        assert_eq!(project_dir(&dir).await.unwrap().cover, None);

        fs::write(dir.join("cover.png"), "x").unwrap();
        let doc = project_dir(&dir).await.unwrap();
        assert_eq!(doc.cover, Some(dir.join("cover.png").display().to_string()));
    }

    #[tokio::test]
    async fn unresolvable_book_propagates_its_error() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        let err = project_dir(&dir).await.unwrap_err();
        assert!(err.message.contains("missing configuration"));
    }

    #[tokio::test]
    async fn failing_chapter_degrades_to_untitled() {
        let tmp = TempDir::new().unwrap();
        let dir = write_book(&tmp, "", &[("01.intro.md", "# Intro\n")]);

        let shelf = Shelf::new(LocalFs);
        // Prime the book so its chapter list survives the file deletion.
        shelf.book(&dir, false).await.unwrap();
        fs::write(dir.join("02.gone.md"), "# Gone\n").unwrap();
        let book = shelf.book(&dir, true).await.unwrap();
        assert_eq!(book.chapters.len(), 2);
        fs::remove_file(dir.join("02.gone.md")).unwrap();

        let doc = project(&shelf, &dir, display_path, false).await.unwrap();
        assert_eq!(doc.chapters.len(), 2);
        assert_eq!(doc.chapters[0].title.as_deref(), Some("Intro"));
        assert_eq!(doc.chapters[1].title, None);
    }

    #[tokio::test]
    async fn serializes_to_flat_json() {
        let tmp = TempDir::new().unwrap();
        let dir = write_book(
            &tmp,
            "title: T\npublished: true\n",
            &[("01.intro.md", "# Welcome\n")],
        );

        let doc = project_dir(&dir).await.unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["kind"], "book");
        assert_eq!(json["config"]["published"], true);
        assert_eq!(json["chapters"][0]["id"], "intro");
        assert_eq!(json["chapters"][0]["title"], "Welcome");
    }
}
