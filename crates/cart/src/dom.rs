//! Minimal document surface and click events.
//!
//! The widget only needs three things from the page it lives in: element
//! lookup by id, text replacement and fragment replacement. [`Document`] is
//! that seam; a browser shell implements it against the real DOM, while
//! [`MemoryDocument`] backs the headless test suites.
//!
//! Clicks arrive as the chain of elements from the click target up to the
//! delegation root, so controls resolve the same way `closest()` does in a
//! browser: a click on an icon inside a buy button still finds the button.

use std::collections::HashMap;

/// The page surface the widget writes into.
pub trait Document {
    /// Whether an element with `id` exists on the current page.
    fn has(&self, id: &str) -> bool;

    /// Replace the text content of the element with `id`.
    /// Returns `false` (and changes nothing) when the element is absent.
    fn set_text(&mut self, id: &str, text: &str) -> bool;

    /// Replace the inner fragment of the element with `id`.
    /// Returns `false` (and changes nothing) when the element is absent.
    fn set_html(&mut self, id: &str, html: &str) -> bool;
}

/// One element in a click chain.
#[derive(Debug, Clone, Default)]
pub struct Element {
    id: Option<String>,
    classes: Vec<String>,
    data: HashMap<String, String>,
}

impl Element {
    /// Create an element with no id, classes or data attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a CSS class.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Add a data attribute (key without the `data-` prefix).
    #[must_use]
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Look up a data attribute (key without the `data-` prefix).
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// The element id, if any.
    #[must_use]
    pub fn element_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A click event: the element chain from the target up to the delegation
/// root, target first.
#[derive(Debug, Clone, Default)]
pub struct Click {
    path: Vec<Element>,
}

impl Click {
    /// Create a click from its element chain, target first.
    #[must_use]
    pub fn new(path: Vec<Element>) -> Self {
        Self { path }
    }

    /// Nearest element in the chain carrying `class`, like `closest()`.
    #[must_use]
    pub fn closest(&self, class: &str) -> Option<&Element> {
        self.path.iter().find(|e| e.has_class(class))
    }

    /// Nearest element in the chain with the exact id.
    #[must_use]
    pub fn closest_id(&self, id: &str) -> Option<&Element> {
        self.path.iter().find(|e| e.element_id() == Some(id))
    }
}

/// In-memory [`Document`] holding the anchors of a simulated page.
///
/// Elements must be registered up front; writes to unregistered ids report
/// `false` just like a page without that anchor.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: HashMap<String, String>,
}

impl MemoryDocument {
    /// Create a document with no elements.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document containing the given (empty) anchors.
    pub fn with_anchors<I>(ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut doc = Self::new();
        for id in ids {
            doc.add_anchor(id);
        }
        doc
    }

    /// Register an empty anchor element.
    pub fn add_anchor(&mut self, id: impl Into<String>) {
        self.nodes.entry(id.into()).or_default();
    }

    /// Current content of an anchor, `None` when it does not exist.
    #[must_use]
    pub fn content(&self, id: &str) -> Option<&str> {
        self.nodes.get(id).map(String::as_str)
    }
}

impl Document for MemoryDocument {
    fn has(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    fn set_text(&mut self, id: &str, text: &str) -> bool {
        match self.nodes.get_mut(id) {
            Some(content) => {
                text.clone_into(content);
                true
            }
            None => false,
        }
    }

    fn set_html(&mut self, id: &str, html: &str) -> bool {
        self.set_text(id, html)
    }
}
