//! Navigation fragment rendering.
//!
//! Turns an ordered navigation model into a nested `<nav>` list. Each entry
//! becomes a link targeting `#<slug>` derived from its label, with an
//! `aria-label` announcing the destination; entries with sub-items get a
//! nested dropdown list of the same link structure, plus focus/blur bindings
//! that reveal the dropdown for keyboard users.

use markup5ever_rcdom::Handle;

use crate::bindings::{Action, Binding, EventKind};
use crate::dom;
use crate::nav::{NavEntry, anchor_slug};

/// Render a navigation model into a `<nav>` fragment.
///
/// Entry and sub-item order is preserved. Labels that derive to the same
/// slug are not deduplicated; both links render with identical targets.
/// The returned bindings carry the focus/blur dropdown reveal for every
/// top-level item that has sub-items; leaf items get none.
pub fn nav_fragment(entries: &[NavEntry]) -> (Handle, Vec<Binding>) {
    let nav = dom::new_element("nav", &[]);
    let list = dom::new_element("ul", &[("class", "nav")]);
    let mut bindings = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let item = dom::new_element("li", &[]);
        dom::append(&item, &nav_link(&entry.label));

        if !entry.sub_items.is_empty() {
            let dropdown = dom::new_element("ul", &[("class", "dropdown")]);
            for sub in &entry.sub_items {
                let sub_item = dom::new_element("li", &[]);
                dom::append(&sub_item, &nav_link(sub));
                dom::append(&dropdown, &sub_item);
            }
            dom::append(&item, &dropdown);

            let item_selector = format!(".nav > li:nth-child({})", index + 1);
            bindings.push(
                Binding::new(
                    format!("{item_selector} > a.nav-item"),
                    EventKind::Focus,
                    Action::AddClass("focused".to_string()),
                )
                .with_target(&item_selector),
            );
            bindings.push(
                Binding::new(
                    format!("{item_selector} > a.nav-item"),
                    EventKind::Blur,
                    Action::RemoveClass("focused".to_string()),
                )
                .with_target(&item_selector),
            );
        }

        dom::append(&list, &item);
    }

    dom::append(&nav, &list);
    (nav, bindings)
}

/// A single navigation link: anchor target derived from the label, visible
/// text equal to the label, and an accessible destination announcement.
fn nav_link(label: &str) -> Handle {
    let href = format!("#{}", anchor_slug(label));
    let aria_label = format!("Maps to {label}");
    let link = dom::new_element(
        "a",
        &[
            ("href", href.as_str()),
            ("class", "nav-item"),
            ("aria-label", aria_label.as_str()),
        ],
    );
    dom::append(&link, &dom::new_text(label));
    link
}
