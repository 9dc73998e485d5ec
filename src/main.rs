use std::path::{Path, PathBuf};

use bookshelf::output;
use bookshelf::preview;
use bookshelf::shelf::Shelf;
use bookshelf::vfs::LocalFs;
use clap::{Parser, Subcommand};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Resolve and preview convention-based book content trees")]
#[command(long_about = "\
Resolve and preview convention-based book content trees

Your filesystem is the data source. Each subdirectory of the content root is
one book: a required config.yaml, an optional cover image, and markdown
chapters ordered by convention.

Content structure:

  books/
  ├── rust-for-beginners/
  │   ├── config.yaml              # Required — book metadata (all fields optional)
  │   ├── cover.png                # Optional — first of cover.{png,jpg,jpeg,webp}
  │   ├── 01.intro.md              # <integer>.<identifier>.md = ordered chapter
  │   ├── 02.setup.md
  │   └── appendix.md              # Any other name = excluded, sorted last
  └── advanced-patterns/
      ├── config.yml
      └── ...

Chapter ordering:
  Explicit:   a `chapters: [intro, setup]` list in config.yaml is authoritative
  Filename:   otherwise <integer>.<identifier>.md encodes order directly

A book that fails to resolve (no config, bad YAML) shows as an error entry in
the listing; the rest of the shelf is unaffected.")]
#[command(version = version_string())]
struct Cli {
    /// Content root containing one subdirectory per book
    #[arg(long, default_value = "books", global = true)]
    source: PathBuf,

    /// Bypass cached resolutions and re-read everything from disk
    #[arg(long, global = true)]
    refresh: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every book under the content root, errors included
    List,
    /// Print a book's preview document as JSON
    Preview {
        /// Book directory (relative paths are joined to --source)
        book: PathBuf,
    },
    /// Resolve everything and exit non-zero if any book failed
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let shelf = Shelf::new(LocalFs);

    match cli.command {
        Command::List => {
            let outcomes = shelf.books(&cli.source, cli.refresh).await?;
            output::print_shelf(&outcomes);
        }
        Command::Preview { book } => {
            let dir = if book.is_absolute() {
                book
            } else {
                cli.source.join(book)
            };
            let doc = preview::project(&shelf, &dir, display_path, cli.refresh).await?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        Command::Check => {
            let outcomes = shelf.books(&cli.source, cli.refresh).await?;
            output::print_shelf(&outcomes);
            let failed = outcomes.iter().filter(|o| o.is_err()).count();
            if failed > 0 {
                std::process::exit(1);
            }
            println!("==> Shelf is valid");
        }
    }

    Ok(())
}

/// Presentation path mapper for the terminal: plain displayable paths.
fn display_path(path: &Path) -> String {
    path.display().to_string()
}
