//! # Bookshelf
//!
//! Resolver, cache, and preview projector for convention-based book content
//! trees. Your filesystem is the data source: a directory is a book, its
//! `config.yaml` is the metadata record, and its markdown files are chapters
//! ordered either by an explicit list in the config or by a
//! `<integer>.<identifier>.md` filename convention.
//!
//! # Architecture: Resolve → Cache → Project
//!
//! ```text
//! 1. Resolve   book dir   →  Book          (classify entries, merge config, order chapters)
//! 2. Cache     (kind,path) → outcome       (success AND failure memoized; force to refresh)
//! 3. Project   Book        → PreviewDocument  (flat JSON for the host panel)
//! ```
//!
//! The separation exists for three reasons:
//!
//! - **Failure isolation**: resolution failures are values ([`error::BookError`]),
//!   caught per book — one broken directory never breaks the shelf listing,
//!   and one broken chapter never breaks its book's preview.
//! - **Cheap refreshes**: hosts re-request content on every UI interaction;
//!   the cache answers from memory, including for resolutions that *failed*,
//!   so a permanently broken book isn't re-read from disk on every repaint.
//! - **Testability**: resolution is a pure function of directory contents
//!   behind the [`vfs::FileGateway`] seam, so identical inputs always produce
//!   structurally identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`vfs`] | Filesystem gateway trait + `tokio::fs` implementation — the crate's only suspension points |
//! | [`chapter`] | Chapter identity/order/inclusion from file names; explicit-list and filename conventions |
//! | [`config`] | The open `config.yaml` record — all fields optional, unknown keys ignored |
//! | [`resolve`] | Directory → [`resolve::Book`] / chapter file → [`resolve::ChapterDoc`] |
//! | [`cache`] | Outcome cache keyed by (content kind, path); `force` is the only invalidation |
//! | [`error`] | [`error::BookError`]: unit-level failure as a value with path attribution |
//! | [`shelf`] | All books under a root, resolved concurrently through one cache |
//! | [`preview`] | Book + chapter titles → flat [`preview::PreviewDocument`] |
//! | [`output`] | CLI listing formatting — per-item error states, pure format functions |
//!
//! # Design Decisions
//!
//! ## Errors Are Values, and They Get Cached
//!
//! Everything above the raw filesystem calls treats a failed resolution as
//! data: a message plus the path it belongs to. Listings render error entries
//! in place, previews degrade failed chapters to untitled entries, and the
//! cache stores failures exactly like successes — retrying a book that has no
//! config file on every refresh buys nothing but disk traffic.
//!
//! ## Explicit Order Type, Not a Sentinel
//!
//! Chapter position is [`chapter::ChapterOrder`]: `Ordered(n)` or
//! `Unordered`, with the comparator defined on the type so every excluded
//! chapter sorts after every ordered one. No magic large integer standing in
//! for "last".
//!
//! ## Two Ordering Conventions, No Migration
//!
//! Authors either declare `chapters: [intro, setup]` in config (robust to
//! renames) or number their files `01.intro.md` (zero config). The resolver
//! takes the explicit list as an optional argument and falls back, so a book
//! can move between conventions by editing one file.
//!
//! ## Uncapped Concurrent Fan-Out
//!
//! A shelf resolves all of its books concurrently, and a preview resolves all
//! of a book's chapters concurrently, with no concurrency limit and no
//! in-flight deduplication. Shelves hold tens of units, not thousands, so
//! latency wins over resource ceilings; output order is always input order,
//! never completion order. Duplicate concurrent computes for one key are
//! harmless — resolution is pure, and the last store wins.

pub mod cache;
pub mod chapter;
pub mod config;
pub mod error;
pub mod output;
pub mod preview;
pub mod resolve;
pub mod shelf;
pub mod vfs;
