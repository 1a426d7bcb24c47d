//! A small element tree standing in for the browser DOM.
//!
//! Elements live in an arena and are addressed by [`NodeId`]. Only the parts a scroll spy
//! touches are modelled: ids, class lists, `href` fragments, parent/child links and the
//! vertical offset of each element from the top of the document.

use std::fmt;

/// Index of an element in its [`Document`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, Default)]
/// A single node of the tree with the attributes the page builder sets.
pub struct Element {
    /// Lowercase tag name, e.g. `li`.
    pub tag: String,
    /// Value of the `id` attribute.
    pub id: Option<String>,
    /// Class list in insertion order, without duplicates.
    pub classes: Vec<String>,
    /// Value of the `href` attribute.
    pub href: Option<String>,
    /// Text content rendered for the element.
    pub text: Option<String>,
    /// Vertical distance from the top of the document.
    pub offset_top: i64,
    /// Containing element, `None` for the root or detached elements.
    pub parent: Option<NodeId>,
    /// Direct children in document order.
    pub children: Vec<NodeId>,
}

impl Element {
    #[must_use]
    /// Whether the class list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// Arena-backed element tree rooted at a `body` element.
pub struct Document {
    elements: Vec<Element>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    #[must_use]
    /// Creates a document holding only its `body`.
    pub fn new() -> Self {
        let body = Element {
            tag: "body".to_string(),
            ..Element::default()
        };
        Self {
            elements: vec![body],
            body: NodeId(0),
        }
    }

    #[must_use]
    /// The root element.
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Number of elements, detached ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false, the body is created with the document.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Creates a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.elements.push(Element {
            tag: tag.to_ascii_lowercase(),
            ..Element::default()
        });
        NodeId(self.elements.len() - 1)
    }

    /// Appends `child` as the last child of `parent`, detaching it from any previous parent.
    ///
    /// Ignored when `child` is `parent` or one of its ancestors, which would make a cycle.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.is_inclusive_ancestor(child, parent) {
            return;
        }
        if let Some(old_parent) = self.elements[child.0].parent.take() {
            self.elements[old_parent.0].children.retain(|&c| c != child);
        }
        self.elements[child.0].parent = Some(parent);
        self.elements[parent.0].children.push(child);
    }

    /// Shorthand for creating an element and appending it to `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let child = self.create_element(tag);
        self.append_child(parent, child);
        child
    }

    #[must_use]
    /// Borrows an element.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not created by this document.
    pub fn element(&self, id: NodeId) -> &Element {
        &self.elements[id.0]
    }

    /// Sets the `id` attribute.
    pub fn set_id(&mut self, node: NodeId, id: &str) {
        self.elements[node.0].id = Some(id.to_string());
    }

    /// Sets the `href` attribute.
    pub fn set_href(&mut self, node: NodeId, href: &str) {
        self.elements[node.0].href = Some(href.to_string());
    }

    /// Sets the text content.
    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.elements[node.0].text = Some(text.to_string());
    }

    /// Sets the offset from the top of the document.
    pub fn set_offset_top(&mut self, node: NodeId, offset_top: i64) {
        self.elements[node.0].offset_top = offset_top;
    }

    #[must_use]
    /// Parent of `node`, if attached.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.elements[node.0].parent
    }

    #[must_use]
    /// Other children of `node`'s parent, in document order.
    pub fn siblings(&self, node: NodeId) -> Vec<NodeId> {
        self.parent(node).map_or_else(Vec::new, |parent| {
            self.elements[parent.0]
                .children
                .iter()
                .copied()
                .filter(|&c| c != node)
                .collect()
        })
    }

    #[must_use]
    /// First attached element whose `id` equals `id`, searched in document order.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .find(|&n| self.elements[n.0].id.as_deref() == Some(id))
    }

    #[must_use]
    /// All attached elements carrying `class`, in document order.
    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.descendants(self.body)
            .into_iter()
            .filter(|&n| self.elements[n.0].has_class(class))
            .collect()
    }

    #[must_use]
    /// Whether `node` carries `class`.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.elements[node.0].has_class(class)
    }

    /// Adds `class` to `node`, keeping the list free of duplicates.
    pub fn add_class(&mut self, node: NodeId, class: &str) {
        let element = &mut self.elements[node.0];
        if !element.has_class(class) {
            element.classes.push(class.to_string());
        }
    }

    /// Removes `class` from `node` if present.
    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.elements[node.0].classes.retain(|c| c != class);
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.elements[n.0].parent;
        }
        false
    }

    /// Pre-order walk starting at (and including) `root`.
    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            out.push(node);
            stack.extend(self.elements[node.0].children.iter().rev().copied());
        }
        out
    }
}

#[cfg(test)]
#[path = "tests/dom.rs"]
mod tests;
