//! # masthead
//!
//! A small library for decorating CMS header blocks — authored as grids of
//! key/value rows — into accessible navigation markup: a logo, a multi-level
//! dropdown menu, an optional search affordance, and a mobile hamburger
//! toggle.
//!
//! ## Features
//!
//! - Parses loosely-structured block rows into a typed [`HeaderConfig`]
//! - Interprets authored `nav-structure` text into an ordered [`NavEntry`] model
//! - Renders the model into nested, ARIA-labelled navigation lists
//! - Describes interactivity as declarative [`Binding`] triples instead of
//!   live handlers, applied on demand with [`dispatch`]
//!
//! ## Quick Start
//!
//! ```
//! use masthead::{decorate, dom};
//!
//! let page = dom::parse_html(
//!     r#"<div class="header">
//!          <div><div>Header</div></div>
//!          <div><div><p>Nav Structure</p></div><div><p>Our Products: Atta | Salt
//! Blogs</p></div></div>
//!        </div>"#,
//! );
//!
//! let block = dom::find_elements_with_class(&page.document, "header").remove(0);
//! let bindings = decorate(&block);
//!
//! let html = dom::serialize_node(&block).unwrap();
//! assert!(html.contains("#our-products"));
//! assert!(!bindings.is_empty());
//! ```
//!
//! Whole documents can be processed in one call with [`decorate_document`],
//! which locates every block by class and returns the serialized result.

pub mod bindings;
pub mod config;
pub mod dom;
pub mod error;
pub mod header;
pub mod nav;
pub mod render;

pub use bindings::{Action, Binding, Effect, EventKind, dispatch};
pub use config::{HeaderConfig, parse_rows};
pub use error::{Error, Result};
pub use header::{
    Decorated, DecorateOptions, decorate, decorate_document, decorate_document_with,
    decorate_with,
};
pub use nav::{NavEntry, anchor_slug, default_entries, parse_structure};
pub use render::nav_fragment;
