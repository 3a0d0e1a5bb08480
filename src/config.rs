//! Block configuration parsing.
//!
//! Authored blocks arrive as a grid of rows and cells: the first row names
//! the block, and each following row is a key/value pair. [`parse_rows`]
//! extracts the raw entries; [`HeaderConfig`] resolves the recognized keys
//! against their documented defaults.

use std::collections::HashMap;

use markup5ever_rcdom::Handle;
use tracing::debug;

use crate::dom;
use crate::nav::anchor_slug;

/// Extract key/value entries from a block's rows.
///
/// Row 0 (the block label) is always skipped. A row needs at least two
/// cells; anything shorter is silently ignored. The key is the trimmed,
/// lower-cased text of the key cell's first `<p>`, with whitespace runs
/// collapsed to hyphens, so an authored "Logo Url" cell resolves to the
/// `logo-url` key. The value prefers an
/// embedded image's `src` over paragraph text, so pasted images resolve to
/// their URL. An entry is emitted only when both key and value are
/// non-empty; duplicate keys overwrite earlier rows.
pub fn parse_rows(block: &Handle) -> HashMap<String, String> {
    let mut entries = HashMap::new();

    let rows = dom::element_children(block);
    for row in rows.iter().skip(1) {
        let cells = dom::element_children(row);
        if cells.len() < 2 {
            continue;
        }

        let key = dom::find_first_element(&cells[0], "p")
            .map(|p| anchor_slug(dom::text_content(&p).trim()))
            .unwrap_or_default();

        let mut value = dom::find_first_element(&cells[1], "p")
            .map(|p| dom::text_content(&p).trim().to_string())
            .unwrap_or_default();
        if let Some(img) = dom::find_first_element(&cells[1], "img") {
            value = dom::get_attribute(&img, "src").unwrap_or_default();
        }

        if !key.is_empty() && !value.is_empty() {
            entries.insert(key, value);
        }
    }

    debug!(rows = rows.len(), entries = entries.len(), "parsed block config");
    entries
}

/// Typed header configuration resolved from a block's entries.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct HeaderConfig {
    /// Explicit logo URL, if authored (`logo-url`).
    pub logo_url: Option<String>,
    /// Raw navigation hierarchy text, if authored (`nav-structure`).
    pub nav_structure: Option<String>,
    /// Whether the search affordance renders. Defaults to `true`; only the
    /// exact string `"false"` disables it.
    pub search_enabled: bool,
    /// Whether the header gets the fixed-position modifier. Defaults to
    /// `false`; only the exact string `"true"` enables it.
    pub fixed: bool,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            logo_url: None,
            nav_structure: None,
            search_enabled: true,
            fixed: false,
        }
    }
}

impl HeaderConfig {
    /// Resolve the recognized keys from a raw entries map.
    pub fn from_entries(entries: &HashMap<String, String>) -> Self {
        Self {
            logo_url: entries.get("logo-url").cloned(),
            nav_structure: entries.get("nav-structure").cloned(),
            search_enabled: entries.get("search-enabled").map(String::as_str) != Some("false"),
            fixed: entries.get("fixed").map(String::as_str) == Some("true"),
        }
    }

    /// Parse a block and resolve its configuration in one step.
    pub fn from_block(block: &Handle) -> Self {
        Self::from_entries(&parse_rows(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(html: &str) -> (markup5ever_rcdom::RcDom, Handle) {
        let dom = dom::parse_html(html);
        let block = dom::find_first_element(&dom.document, "div").unwrap();
        (dom, block)
    }

    #[test]
    fn test_label_row_only_yields_empty_entries() {
        let (_dom, block) = block("<div><div><div>Header</div></div></div>");
        assert!(parse_rows(&block).is_empty());
    }

    #[test]
    fn test_key_value_row() {
        let (_dom, block) = block(
            "<div>\
               <div><div>Header</div></div>\
               <div><div><p>Logo Url</p></div><div><p>https://x/y.png</p></div></div>\
             </div>",
        );
        let entries = parse_rows(&block);
        assert_eq!(entries.get("logo-url").map(String::as_str), Some("https://x/y.png"));
    }

    #[test]
    fn test_image_overrides_text() {
        let (_dom, block) = block(
            "<div>\
               <div><div>Header</div></div>\
               <div><div><p>Logo Url</p></div><div><p>ignored</p><img src=\"a.png\"></div></div>\
             </div>",
        );
        let entries = parse_rows(&block);
        assert_eq!(entries.get("logo-url").map(String::as_str), Some("a.png"));
    }

    #[test]
    fn test_short_row_skipped() {
        let (_dom, block) = block(
            "<div>\
               <div><div>Header</div></div>\
               <div><div><p>orphan</p></div></div>\
               <div><div><p>Fixed</p></div><div><p>true</p></div></div>\
             </div>",
        );
        let entries = parse_rows(&block);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("fixed").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_empty_key_or_value_dropped() {
        let (_dom, block) = block(
            "<div>\
               <div><div>Header</div></div>\
               <div><div><p>  </p></div><div><p>value</p></div></div>\
               <div><div><p>key</p></div><div><p></p></div></div>\
             </div>",
        );
        assert!(parse_rows(&block).is_empty());
    }

    #[test]
    fn test_duplicate_keys_last_write_wins() {
        let (_dom, block) = block(
            "<div>\
               <div><div>Header</div></div>\
               <div><div><p>Fixed</p></div><div><p>false</p></div></div>\
               <div><div><p>Fixed</p></div><div><p>true</p></div></div>\
             </div>",
        );
        let entries = parse_rows(&block);
        assert_eq!(entries.get("fixed").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_key_is_normalized() {
        let (_dom, block) = block(
            "<div>\
               <div><div>Header</div></div>\
               <div><div><p>  Nav Structure </p></div><div><p>Blogs</p></div></div>\
             </div>",
        );
        let entries = parse_rows(&block);
        assert!(entries.contains_key("nav-structure"));
    }

    #[test]
    fn test_config_defaults() {
        let config = HeaderConfig::from_entries(&HashMap::new());
        assert_eq!(config, HeaderConfig::default());
        assert!(config.search_enabled);
        assert!(!config.fixed);
        assert!(config.logo_url.is_none());
    }

    #[test]
    fn test_search_disabled_only_by_exact_false() {
        let mut entries = HashMap::new();
        entries.insert("search-enabled".to_string(), "no".to_string());
        assert!(HeaderConfig::from_entries(&entries).search_enabled);

        entries.insert("search-enabled".to_string(), "False".to_string());
        assert!(HeaderConfig::from_entries(&entries).search_enabled);

        entries.insert("search-enabled".to_string(), "false".to_string());
        assert!(!HeaderConfig::from_entries(&entries).search_enabled);
    }

    #[test]
    fn test_fixed_enabled_only_by_exact_true() {
        let mut entries = HashMap::new();
        entries.insert("fixed".to_string(), "yes".to_string());
        assert!(!HeaderConfig::from_entries(&entries).fixed);

        entries.insert("fixed".to_string(), "true".to_string());
        assert!(HeaderConfig::from_entries(&entries).fixed);
    }
}
