//! CLI output formatting for shelf listings.
//!
//! Output is information-centric: the primary line for every book is its
//! positional index + display name (+ chapter count), with the source
//! directory and per-chapter detail as indented context lines. Books that
//! failed to resolve keep their position in the listing and render an `ERR`
//! line instead of disappearing — the rest of the shelf stays readable.
//!
//! ```text
//! Books
//! 001 rust-for-beginners (3 chapters)
//!     Source: rust-for-beginners/
//!     001 intro
//!     002 setup
//!     --- appendix (excluded)
//! ERR broken-book
//!     missing configuration (config.yaml or config.yml): /shelf/broken-book
//! ```
//!
//! Format functions are pure (return `Vec<String>`, no I/O); `print_*`
//! wrappers write to stdout.

use std::sync::Arc;

use crate::error::BookError;
use crate::resolve::Book;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Header line for one resolved book: index, name, chapter count.
fn book_header(index: usize, book: &Book) -> String {
    let count = book.chapters.len();
    let noun = if count == 1 { "chapter" } else { "chapters" };
    format!("{} {} ({count} {noun})", format_index(index), book.name)
}

/// Format a whole shelf listing, one block per outcome, listing order kept.
pub fn format_shelf(outcomes: &[Result<Arc<Book>, BookError>]) -> Vec<String> {
    let mut lines = vec!["Books".to_string()];
    for (pos, outcome) in outcomes.iter().enumerate() {
        match outcome {
            Ok(book) => {
                lines.push(book_header(pos + 1, book));
                lines.push(format!("    Source: {}/", book.name));
                let mut ordered = 0;
                for chapter in &book.chapters {
                    if chapter.excluded() {
                        lines.push(format!("    --- {} (excluded)", chapter.id));
                    } else {
                        ordered += 1;
                        lines.push(format!("    {} {}", format_index(ordered), chapter.id));
                    }
                }
            }
            Err(err) => {
                lines.push(format!(
                    "ERR {}",
                    err.path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| err.path.display().to_string())
                ));
                lines.push(format!("    {err}"));
            }
        }
    }

    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    lines.push(String::new());
    lines.push(match failed {
        0 => format!("{} books resolved", outcomes.len()),
        n => format!("{} books resolved, {n} failed", outcomes.len() - n),
    });
    lines
}

/// Print a shelf listing to stdout.
pub fn print_shelf(outcomes: &[Result<Arc<Book>, BookError>]) {
    for line in format_shelf(outcomes) {
        println!("{line}");
    }
}
