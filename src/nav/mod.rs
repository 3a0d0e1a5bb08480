//! Navigation model parsing.
//!
//! Interprets the authored `nav-structure` text — one menu entry per line,
//! with `parent: child | child | ...` describing a dropdown — into an
//! ordered list of [`NavEntry`] values, falling back to a fixed default
//! hierarchy when the field is absent.

mod slug;

pub use slug::anchor_slug;

use tracing::debug;

/// One navigable item in the header menu, optionally with a nested group of
/// sub-items (a dropdown).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct NavEntry {
    pub label: String,
    /// Dropdown labels, in authoring order. Empty for leaf entries.
    pub sub_items: Vec<String>,
}

impl NavEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sub_items: Vec::new(),
        }
    }

    pub fn with_sub_items<I, S>(label: impl Into<String>, sub_items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            sub_items: sub_items.into_iter().map(Into::into).collect(),
        }
    }
}

/// The fallback hierarchy used when no `nav-structure` is authored.
///
/// This is a designed default, reproduced exactly for compatibility with
/// existing sites: one dropdown parent with eight sub-items, then four flat
/// entries.
pub fn default_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::with_sub_items(
            "Our Products",
            [
                "Atta",
                "Salt",
                "Organic",
                "Bensan",
                "Millets",
                "Vermicelli",
                "Rava",
                "Naans & Parathas",
            ],
        ),
        NavEntry::new("Our Story"),
        NavEntry::new("Recipe"),
        NavEntry::new("Blogs"),
        NavEntry::new("FAQs"),
    ]
}

/// Parse authored `nav-structure` text into an ordered navigation model.
///
/// Each non-empty line becomes one entry. A line containing a colon is split
/// on the first colon only: the left part is the entry label, the right part
/// is a `|`-separated list of sub-items (trimmed, empties discarded). A line
/// ending in `:` yields a parent with no sub-items, same as a line without
/// any colon.
///
/// `None` or an empty string yields [`default_entries`].
pub fn parse_structure(text: Option<&str>) -> Vec<NavEntry> {
    let text = match text {
        Some(t) if !t.is_empty() => t,
        _ => {
            debug!("no nav-structure authored, using default hierarchy");
            return default_entries();
        }
    };

    let mut entries = Vec::new();
    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        match line.split_once(':') {
            Some((label, rest)) => {
                let sub_items = rest
                    .split('|')
                    .map(str::trim)
                    .filter(|sub| !sub.is_empty())
                    .map(String::from)
                    .collect();
                entries.push(NavEntry {
                    label: label.trim().to_string(),
                    sub_items,
                });
            }
            None => entries.push(NavEntry::new(line)),
        }
    }

    debug!(entries = entries.len(), "parsed nav structure");
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_input_yields_default() {
        let entries = parse_structure(None);
        assert_eq!(entries, default_entries());
    }

    #[test]
    fn test_empty_input_yields_default() {
        let entries = parse_structure(Some(""));
        assert_eq!(entries, default_entries());
    }

    #[test]
    fn test_default_shape() {
        let entries = default_entries();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].label, "Our Products");
        assert_eq!(entries[0].sub_items.len(), 8);
        assert_eq!(entries[0].sub_items[7], "Naans & Parathas");
        assert!(entries[1..].iter().all(|e| e.sub_items.is_empty()));
    }

    #[test]
    fn test_parent_with_sub_items_and_flat_entry() {
        let entries = parse_structure(Some("Our Products: Atta | Salt\nBlogs"));
        assert_eq!(
            entries,
            vec![
                NavEntry::with_sub_items("Our Products", ["Atta", "Salt"]),
                NavEntry::new("Blogs"),
            ]
        );
    }

    #[test]
    fn test_trailing_colon_yields_empty_sub_items() {
        let entries = parse_structure(Some("Parent:"));
        assert_eq!(entries, vec![NavEntry::new("Parent")]);
    }

    #[test]
    fn test_first_colon_only_split() {
        let entries = parse_structure(Some("Shop: By Range: Premium | Value"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Shop");
        assert_eq!(entries[0].sub_items, vec!["By Range: Premium", "Value"]);
    }

    #[test]
    fn test_blank_lines_and_padding_dropped() {
        let entries = parse_structure(Some("  One  \n\n   \nTwo: A |  | B \n"));
        assert_eq!(
            entries,
            vec![
                NavEntry::new("One"),
                NavEntry::with_sub_items("Two", ["A", "B"]),
            ]
        );
    }

    #[test]
    fn test_order_preserved() {
        let entries = parse_structure(Some("C\nA\nB"));
        let labels: Vec<_> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["C", "A", "B"]);
    }

    #[test]
    fn test_whitespace_only_input_is_not_default() {
        // A non-empty string of blanks parses to an empty model rather than
        // triggering the default fallback.
        let entries = parse_structure(Some("   \n  "));
        assert!(entries.is_empty());
    }
}
