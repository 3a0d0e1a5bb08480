//! Declarative event bindings for decorated headers.
//!
//! Decoration never attaches live handlers. Instead it returns an immutable
//! list of [`Binding`] values — (selector, event, action) triples — that
//! describe the header's interactive behavior. A host runtime attaches real
//! listeners from this list; [`dispatch`] applies a binding's action to the
//! tree directly, so the behaviors are testable without one.

use markup5ever_rcdom::Handle;

use crate::dom;

/// The DOM event a binding listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum EventKind {
    Click,
    Focus,
    Blur,
}

/// What happens when the event fires.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "cli",
    derive(serde::Serialize),
    serde(tag = "kind", content = "value", rename_all = "kebab-case")
)]
pub enum Action {
    /// Toggle a class on the target element.
    ToggleClass(String),
    /// Add a class to the target element.
    AddClass(String),
    /// Remove a class from the target element.
    RemoveClass(String),
    /// Navigate the page to a destination.
    Navigate(String),
}

/// One (selector, event, action) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct Binding {
    /// Selector for the element the event fires on.
    pub selector: String,
    pub event: EventKind,
    /// Selector for the element the action applies to. `None` means the
    /// action applies to the element the event fired on.
    #[cfg_attr(feature = "cli", serde(skip_serializing_if = "Option::is_none"))]
    pub target: Option<String>,
    pub action: Action,
}

impl Binding {
    pub fn new(selector: impl Into<String>, event: EventKind, action: Action) -> Self {
        Self {
            selector: selector.into(),
            event,
            target: None,
            action,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// A side effect a dispatched binding asks the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate to the given destination.
    Visit(String),
}

/// Apply a binding's action to the tree under `root`.
///
/// Class actions mutate the resolved target element and return `None`; a
/// [`Action::Navigate`] returns the destination as an [`Effect`] instead.
/// A selector that no longer resolves is a no-op.
pub fn dispatch(root: &Handle, binding: &Binding) -> Option<Effect> {
    if let Action::Navigate(destination) = &binding.action {
        return Some(Effect::Visit(destination.clone()));
    }

    let selector = binding.target.as_deref().unwrap_or(&binding.selector);
    let target = dom::select_first(root, selector)?;

    match &binding.action {
        Action::ToggleClass(class) => dom::toggle_class(&target, class),
        Action::AddClass(class) => dom::add_class(&target, class),
        Action::RemoveClass(class) => dom::remove_class(&target, class),
        Action::Navigate(_) => {}
    }

    None
}
