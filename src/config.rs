//! Book configuration: the open `config.yaml` record.
//!
//! Every book directory carries a `config.yaml` (or `config.yml`) describing
//! the book. The record is deliberately schema-light: every field is optional,
//! unknown keys are ignored, and an empty file is a valid config. Books are
//! authored by hand against several tool versions, so a typo'd or novel key
//! must never fail resolution — the opposite trade-off from a site-generator
//! config, where rejecting unknown keys catches mistakes early.
//!
//! ```yaml
//! slug: rust-for-beginners     # defaults to the directory name
//! title: Rust for Beginners
//! summary: A gentle on-ramp.
//! topics: [rust, beginners]
//! price: 19.99
//! published: true
//! chapters:                    # explicit chapter order (optional)
//!   - intro
//!   - setup
//! toc_depth: 2
//! ```
//!
//! When `chapters` is present and non-empty it is the authoritative chapter
//! order; otherwise ordering falls back to the `<integer>.<identifier>.md`
//! filename convention (see [`crate::chapter`]).

use serde::{Deserialize, Serialize};

/// Config file names recognized in a book directory, in match priority.
/// Extensions are matched case-sensitively.
pub const CONFIG_NAMES: &[&str] = &["config.yaml", "config.yml"];

/// Parsed contents of a book's `config.yaml`.
///
/// All fields optional; absence never fails resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    /// URL/storefront identifier. Defaults to the book directory's name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    /// Explicit chapter identifiers in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Vec<String>>,
    /// Table-of-contents depth for rendering hosts.
    #[serde(alias = "tocDepth", skip_serializing_if = "Option::is_none")]
    pub toc_depth: Option<u32>,
}

impl BookConfig {
    /// Parse YAML text. An empty (or whitespace-only) file is a valid,
    /// all-default config.
    pub fn parse(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// The explicit chapter order list, if declared and non-empty.
    /// An empty `chapters: []` behaves as if absent.
    pub fn explicit_order(&self) -> Option<&[String]> {
        self.chapters.as_deref().filter(|list| !list.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_config_parses() {
        let cfg = BookConfig::parse(
            "slug: my-book\n\
             title: My Book\n\
             summary: About things.\n\
             topics: [rust, tooling]\n\
             price: 9.99\n\
             published: true\n\
             chapters: [intro, setup]\n\
             toc_depth: 3\n",
        )
        .unwrap();
        assert_eq!(cfg.slug.as_deref(), Some("my-book"));
        assert_eq!(
            cfg.topics.as_deref(),
            Some(&["rust".to_string(), "tooling".to_string()][..])
        );
        assert_eq!(cfg.price, Some(9.99));
        assert_eq!(cfg.published, Some(true));
        assert_eq!(cfg.toc_depth, Some(3));
    }

    #[test]
    fn empty_file_is_all_defaults() {
        assert_eq!(BookConfig::parse("").unwrap(), BookConfig::default());
        assert_eq!(BookConfig::parse("  \n\t\n").unwrap(), BookConfig::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = BookConfig::parse("title: T\nfuture_field: whatever\n").unwrap();
        assert_eq!(cfg.title.as_deref(), Some("T"));
    }

    #[test]
    fn camel_case_toc_depth_alias() {
        let cfg = BookConfig::parse("tocDepth: 2\n").unwrap();
        assert_eq!(cfg.toc_depth, Some(2));
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(BookConfig::parse("title: [unclosed\n").is_err());
    }

    #[test]
    fn explicit_order_requires_non_empty_list() {
        let cfg = BookConfig::parse("chapters: []\n").unwrap();
        assert_eq!(cfg.explicit_order(), None);

        let cfg = BookConfig::parse("chapters: [intro]\n").unwrap();
        assert_eq!(cfg.explicit_order(), Some(&["intro".to_string()][..]));
    }

    #[test]
    fn serialized_config_omits_absent_fields() {
        let json = serde_json::to_string(&BookConfig::parse("title: T\n").unwrap()).unwrap();
        assert_eq!(json, r#"{"title":"T"}"#);
    }
}
