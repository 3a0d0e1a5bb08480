//! HTML parsing and manipulation using html5ever
//!
//! Provides utilities for:
//! - Parsing HTML documents and fragments
//! - Querying elements (by name, by class, first `<p>`/`<img>` descendant)
//! - Building and mutating element trees (attributes, class lists, children)
//! - Serializing back to HTML

mod select;

pub use select::select_first;

use std::cell::RefCell;
use std::default::Default;
use std::rc::Rc;

use html5ever::parse_document;
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::{StrTendril, TendrilSink};
use html5ever::tree_builder::TreeBuilderOpts;
use html5ever::{Attribute, LocalName, ParseOpts, QualName, namespace_url, ns};

pub use markup5ever_rcdom::{Handle, NodeData, RcDom};
use markup5ever_rcdom::{Node, SerializableHandle};

use crate::error::Result;

/// Parse HTML content into a DOM tree.
///
/// Bare fragments are tolerated: the parser wraps them in the implied
/// `<html><body>` structure.
pub fn parse_html(html: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: false,
            ..Default::default()
        },
        ..Default::default()
    };

    parse_document(RcDom::default(), opts)
        .from_utf8()
        .one(html.as_bytes())
}

/// Serialize a DOM tree back to an HTML string.
pub fn serialize_document(dom: &RcDom) -> Result<String> {
    let mut bytes = Vec::new();
    let document: SerializableHandle = dom.document.clone().into();

    serialize(&mut bytes, &document, SerializeOpts::default())?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Serialize a node and its children to an HTML string.
pub fn serialize_node(handle: &Handle) -> Result<String> {
    let mut bytes = Vec::new();
    let serializable: SerializableHandle = handle.clone().into();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    serialize(&mut bytes, &serializable, opts)?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Create a detached HTML element with the given attributes.
pub fn new_element(name: &str, attrs: &[(&str, &str)]) -> Handle {
    Node::new(NodeData::Element {
        name: QualName::new(None, ns!(html), LocalName::from(name)),
        attrs: RefCell::new(
            attrs
                .iter()
                .map(|(key, value)| Attribute {
                    name: QualName::new(None, ns!(), LocalName::from(*key)),
                    value: (*value).into(),
                })
                .collect(),
        ),
        template_contents: RefCell::new(None),
        mathml_annotation_xml_integration_point: false,
    })
}

/// Create a detached text node.
pub fn new_text(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from(text)),
    })
}

/// Append a child node to a parent, fixing up the parent pointer.
pub fn append(parent: &Handle, child: &Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child.clone());
}

/// Remove all children from a node.
pub fn clear_children(handle: &Handle) {
    for child in handle.children.borrow().iter() {
        child.parent.set(None);
    }
    handle.children.borrow_mut().clear();
}

/// Direct element children of a node, in tree order.
///
/// Whitespace text nodes and comments between elements are skipped, matching
/// how a rendering pipeline addresses block rows and cells.
pub fn element_children(handle: &Handle) -> Vec<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .filter(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Resolve a node's parent, if it is still alive.
pub fn parent_of(handle: &Handle) -> Option<Handle> {
    let weak = handle.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    handle.parent.set(weak);
    parent
}

/// The local tag name of an element node.
pub fn tag_name(handle: &Handle) -> Option<String> {
    if let NodeData::Element { ref name, .. } = handle.data {
        Some(name.local.as_ref().to_string())
    } else {
        None
    }
}

/// Get the first element with the given local name, depth-first.
pub fn find_first_element(handle: &Handle, name: &str) -> Option<Handle> {
    if let NodeData::Element { name: ref qname, .. } = handle.data {
        if qname.local.as_ref() == name {
            return Some(handle.clone());
        }
    }

    for child in handle.children.borrow().iter() {
        if let Some(found) = find_first_element(child, name) {
            return Some(found);
        }
    }

    None
}

/// Find all elements carrying the given class, depth-first.
pub fn find_elements_with_class(handle: &Handle, class: &str) -> Vec<Handle> {
    let mut results = Vec::new();
    find_with_class_recursive(handle, class, &mut results);
    results
}

fn find_with_class_recursive(handle: &Handle, class: &str, results: &mut Vec<Handle>) {
    if has_class(handle, class) {
        results.push(handle.clone());
    }

    for child in handle.children.borrow().iter() {
        find_with_class_recursive(child, class, results);
    }
}

/// Get text content from a node (ignoring tags).
pub fn text_content(handle: &Handle) -> String {
    let mut text = String::new();
    text_recursive(handle, &mut text);
    text
}

fn text_recursive(handle: &Handle, text: &mut String) {
    match handle.data {
        NodeData::Text { ref contents } => {
            text.push_str(&contents.borrow());
        }
        NodeData::Element { .. } => {
            for child in handle.children.borrow().iter() {
                text_recursive(child, text);
            }
        }
        _ => {}
    }
}

/// Get an attribute value from an element.
pub fn get_attribute(handle: &Handle, attr_name: &str) -> Option<String> {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        for attr in attrs.borrow().iter() {
            if attr.name.local.as_ref() == attr_name {
                return Some(attr.value.to_string());
            }
        }
    }
    None
}

/// Set an attribute on an element, replacing any existing value.
pub fn set_attribute(handle: &Handle, attr_name: &str, value: &str) {
    if let NodeData::Element { ref attrs, .. } = handle.data {
        let mut attrs_mut = attrs.borrow_mut();

        for attr in attrs_mut.iter_mut() {
            if attr.name.local.as_ref() == attr_name {
                attr.value = value.into();
                return;
            }
        }

        attrs_mut.push(Attribute {
            name: QualName::new(None, ns!(), LocalName::from(attr_name)),
            value: value.into(),
        });
    }
}

/// Whether an element's class list contains the given class.
pub fn has_class(handle: &Handle, class: &str) -> bool {
    get_attribute(handle, "class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

/// Add a class to an element's class list (no-op if already present).
pub fn add_class(handle: &Handle, class: &str) {
    if has_class(handle, class) {
        return;
    }
    let classes = get_attribute(handle, "class").unwrap_or_default();
    let updated = if classes.trim().is_empty() {
        class.to_string()
    } else {
        format!("{} {}", classes.trim(), class)
    };
    set_attribute(handle, "class", &updated);
}

/// Remove a class from an element's class list (no-op if absent).
pub fn remove_class(handle: &Handle, class: &str) {
    let Some(classes) = get_attribute(handle, "class") else {
        return;
    };
    let updated = classes
        .split_whitespace()
        .filter(|c| *c != class)
        .collect::<Vec<_>>()
        .join(" ");
    set_attribute(handle, "class", &updated);
}

/// Toggle a class on an element's class list.
pub fn toggle_class(handle: &Handle, class: &str) {
    if has_class(handle, class) {
        remove_class(handle, class);
    } else {
        add_class(handle, class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize() {
        let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
        let dom = parse_html(html);
        let output = serialize_document(&dom).unwrap();
        assert!(output.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_parse_bare_fragment() {
        let dom = parse_html("<div class=\"header\"><p>Hi</p></div>");
        let div = find_first_element(&dom.document, "div").unwrap();
        assert!(has_class(&div, "header"));
    }

    #[test]
    fn test_text_content() {
        let dom = parse_html("<p>Hello <strong>World</strong></p>");
        let p = find_first_element(&dom.document, "p").unwrap();
        assert_eq!(text_content(&p).trim(), "Hello World");
    }

    #[test]
    fn test_element_children_skips_whitespace() {
        let dom = parse_html("<div>\n  <span>a</span>\n  <span>b</span>\n</div>");
        let div = find_first_element(&dom.document, "div").unwrap();
        assert_eq!(element_children(&div).len(), 2);
    }

    #[test]
    fn test_build_and_serialize_element() {
        let link = new_element("a", &[("href", "#home"), ("class", "nav-item")]);
        append(&link, &new_text("Home"));
        let html = serialize_node(&link).unwrap();
        assert!(html.contains("href=\"#home\""));
        assert!(html.contains(">Home</a>"));
    }

    #[test]
    fn test_append_sets_parent() {
        let parent = new_element("ul", &[]);
        let child = new_element("li", &[]);
        append(&parent, &child);
        let resolved = parent_of(&child).unwrap();
        assert!(Rc::ptr_eq(&resolved, &parent));
    }

    #[test]
    fn test_clear_children() {
        let dom = parse_html("<div><p>a</p><p>b</p></div>");
        let div = find_first_element(&dom.document, "div").unwrap();
        clear_children(&div);
        assert!(div.children.borrow().is_empty());
    }

    #[test]
    fn test_attributes() {
        let el = new_element("img", &[("src", "a.png")]);
        assert_eq!(get_attribute(&el, "src").as_deref(), Some("a.png"));
        set_attribute(&el, "src", "b.png");
        set_attribute(&el, "alt", "logo");
        assert_eq!(get_attribute(&el, "src").as_deref(), Some("b.png"));
        assert_eq!(get_attribute(&el, "alt").as_deref(), Some("logo"));
    }

    #[test]
    fn test_class_list_ops() {
        let el = new_element("header", &[("class", "masthead")]);
        assert!(has_class(&el, "masthead"));
        add_class(&el, "fixed");
        assert!(has_class(&el, "fixed"));
        add_class(&el, "fixed");
        assert_eq!(get_attribute(&el, "class").as_deref(), Some("masthead fixed"));
        toggle_class(&el, "nav-open");
        assert!(has_class(&el, "nav-open"));
        toggle_class(&el, "nav-open");
        assert!(!has_class(&el, "nav-open"));
        remove_class(&el, "fixed");
        assert_eq!(get_attribute(&el, "class").as_deref(), Some("masthead"));
    }

    #[test]
    fn test_find_elements_with_class() {
        let dom = parse_html(
            "<div class=\"header block\"></div><div class=\"footer\"></div><div class=\"header\"></div>",
        );
        let found = find_elements_with_class(&dom.document, "header");
        assert_eq!(found.len(), 2);
    }
}
