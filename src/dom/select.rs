//! Minimal selector resolution for event binding targets.
//!
//! Decorated headers describe their interactive behavior as (selector, event,
//! action) triples. The selectors the renderer emits use a small grammar —
//! tag names, `.class`, `:nth-child(n)`, the child combinator `>`, and the
//! descendant combinator (whitespace) — and this resolver covers exactly
//! that grammar.

use std::rc::Rc;

use markup5ever_rcdom::{Handle, NodeData};

use super::{element_children, has_class, parent_of};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
}

#[derive(Debug, Clone, Default)]
struct Compound {
    tag: Option<String>,
    classes: Vec<String>,
    nth_child: Option<usize>,
}

/// Resolve a selector to the first matching element under `root`, in tree
/// order. `root` itself is never matched.
pub fn select_first(root: &Handle, selector: &str) -> Option<Handle> {
    let steps = parse_selector(selector)?;

    let mut current = vec![root.clone()];
    for (combinator, compound) in &steps {
        let mut next = Vec::new();
        for node in &current {
            match combinator {
                Combinator::Descendant => collect_descendants(node, compound, &mut next),
                Combinator::Child => {
                    for child in element_children(node) {
                        if matches(&child, compound) {
                            next.push(child);
                        }
                    }
                }
            }
        }
        if next.is_empty() {
            return None;
        }
        current = next;
    }

    current.into_iter().next()
}

fn collect_descendants(node: &Handle, compound: &Compound, results: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if matches(child, compound) {
            results.push(child.clone());
        }
        collect_descendants(child, compound, results);
    }
}

fn matches(node: &Handle, compound: &Compound) -> bool {
    let NodeData::Element { ref name, .. } = node.data else {
        return false;
    };

    if let Some(ref tag) = compound.tag {
        if name.local.as_ref() != tag {
            return false;
        }
    }

    if !compound.classes.iter().all(|c| has_class(node, c)) {
        return false;
    }

    if let Some(n) = compound.nth_child {
        let Some(parent) = parent_of(node) else {
            return false;
        };
        let position = element_children(&parent)
            .iter()
            .position(|sibling| Rc::ptr_eq(sibling, node));
        if position != Some(n - 1) {
            return false;
        }
    }

    true
}

/// Parse a selector into (combinator, compound) steps. Returns `None` on
/// anything outside the supported grammar.
fn parse_selector(selector: &str) -> Option<Vec<(Combinator, Compound)>> {
    let mut steps = Vec::new();
    let mut combinator = Combinator::Descendant;

    for token in selector.split_whitespace() {
        if token == ">" {
            if steps.is_empty() {
                return None;
            }
            combinator = Combinator::Child;
            continue;
        }
        steps.push((combinator, parse_compound(token)?));
        combinator = Combinator::Descendant;
    }

    if steps.is_empty() { None } else { Some(steps) }
}

fn parse_compound(token: &str) -> Option<Compound> {
    let mut compound = Compound::default();
    let mut rest = token;

    if let Some(start) = rest.find(":nth-child(") {
        let after = &rest[start + ":nth-child(".len()..];
        let close = after.find(')')?;
        let n: usize = after[..close].parse().ok()?;
        if n < 1 {
            return None;
        }
        compound.nth_child = Some(n);
        if !after[close + 1..].is_empty() {
            return None;
        }
        rest = &token[..start];
    }

    let mut parts = rest.split('.');
    let tag = parts.next().unwrap_or("");
    if !tag.is_empty() {
        compound.tag = Some(tag.to_string());
    }
    for class in parts {
        if class.is_empty() {
            return None;
        }
        compound.classes.push(class.to_string());
    }

    Some(compound)
}
