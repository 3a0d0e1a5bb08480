//! Header block decoration.
//!
//! Replaces a block's authored rows with the assembled header: hamburger
//! toggle, logo, navigation, and the optional search affordance, in that
//! order. Decoration never fails; missing or malformed config falls back to
//! documented defaults.

use markup5ever_rcdom::Handle;
use tracing::debug;

use crate::bindings::{Action, Binding, EventKind};
use crate::config::HeaderConfig;
use crate::error::{Error, Result};
use crate::{dom, nav, render};

/// Collaborator options for decoration.
#[derive(Debug, Clone, Default)]
pub struct DecorateOptions {
    /// Code-base-relative prefix used to compute the default logo location
    /// when no explicit `logo-url` is authored.
    pub code_base_path: String,
}

/// Result of decorating a whole document.
#[derive(Debug, Clone)]
pub struct Decorated {
    /// The serialized document after decoration.
    pub html: String,
    /// Event bindings accumulated across all decorated blocks.
    pub bindings: Vec<Binding>,
    /// How many blocks were decorated.
    pub blocks: usize,
}

/// Decorate a header block in place with default options.
///
/// See [`decorate_with`].
pub fn decorate(block: &Handle) -> Vec<Binding> {
    decorate_with(block, &DecorateOptions::default())
}

/// Decorate a header block in place.
///
/// Parses the block's rows into configuration, replaces the block's children
/// with the assembled header, and returns the event bindings describing its
/// interactive behavior. Binding selectors resolve relative to the block.
pub fn decorate_with(block: &Handle, options: &DecorateOptions) -> Vec<Binding> {
    let config = HeaderConfig::from_block(block);

    let logo_url = config
        .logo_url
        .clone()
        .unwrap_or_else(|| format!("{}/icons/logo.png", options.code_base_path));
    let entries = nav::parse_structure(config.nav_structure.as_deref());

    debug!(
        logo_url = %logo_url,
        nav_entries = entries.len(),
        search_enabled = config.search_enabled,
        fixed = config.fixed,
        "decorating header block"
    );

    dom::clear_children(block);

    let header = dom::new_element("header", &[("class", "masthead")]);
    if config.fixed {
        dom::add_class(&header, "fixed");
    }

    let mut bindings = Vec::new();

    let hamburger = dom::new_element("div", &[("class", "nav-hamburger")]);
    for _ in 0..3 {
        dom::append(&hamburger, &dom::new_element("span", &[]));
    }
    dom::append(&header, &hamburger);
    bindings.push(
        Binding::new(
            ".nav-hamburger",
            EventKind::Click,
            Action::ToggleClass("nav-open".to_string()),
        )
        .with_target(".masthead"),
    );

    let logo = dom::new_element(
        "img",
        &[
            ("src", logo_url.as_str()),
            ("alt", "Site logo"),
            ("class", "logo"),
        ],
    );
    dom::append(&header, &logo);

    let (nav_fragment, nav_bindings) = render::nav_fragment(&entries);
    dom::append(&header, &nav_fragment);
    bindings.extend(nav_bindings);

    if config.search_enabled {
        let search = dom::new_element(
            "div",
            &[("class", "search-icon"), ("aria-label", "Search")],
        );
        dom::append(&search, &dom::new_text("\u{1F50D}"));
        dom::append(&header, &search);
        bindings.push(Binding::new(
            ".search-icon",
            EventKind::Click,
            Action::Navigate("/search".to_string()),
        ));
    }

    dom::append(block, &header);
    bindings
}

/// Decorate every block carrying `block_class` in an HTML document.
///
/// Returns the serialized document together with the bindings accumulated
/// across blocks. Fails only when no block is found.
pub fn decorate_document(html: &str, block_class: &str) -> Result<Decorated> {
    decorate_document_with(html, block_class, &DecorateOptions::default())
}

/// [`decorate_document`] with explicit options.
pub fn decorate_document_with(
    html: &str,
    block_class: &str,
    options: &DecorateOptions,
) -> Result<Decorated> {
    let document = dom::parse_html(html);

    let blocks = dom::find_elements_with_class(&document.document, block_class);
    if blocks.is_empty() {
        return Err(Error::MissingBlock(block_class.to_string()));
    }

    let mut bindings = Vec::new();
    for block in &blocks {
        bindings.extend(decorate_with(block, options));
    }

    Ok(Decorated {
        html: dom::serialize_document(&document)?,
        bindings,
        blocks: blocks.len(),
    })
}
