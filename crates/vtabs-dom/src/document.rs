//! Document tree
//!
//! Wraps a parsed [`scraper::Html`]. New nodes are created as orphans in the
//! same tree and attached with [`Document::append_child`]; detached nodes
//! stay in the tree but are unreachable from the root.

use std::collections::HashMap;
use std::sync::Arc;

use scraper::{CaseSensitivity, ElementRef, Html, Node, Selector};
use scraper::node::Element;

use crate::error::DomError;
use crate::event::{Event, EventKind, Listener, ListenerId, Registration};
use crate::node::{self, AttrEdit, NodeId};
use crate::Result;

pub struct Document {
    pub(crate) html: Html,
    listeners: HashMap<NodeId, Vec<Registration>>,
    next_listener: u64,
}

impl Document {
    /// Create an empty page: `<!DOCTYPE html><html><head></head><body></body></html>`
    pub fn new() -> Self {
        Self::parse_html("<!DOCTYPE html>")
    }

    pub(crate) fn from_tree(html: Html) -> Self {
        Self {
            html,
            listeners: HashMap::new(),
            next_listener: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(self.html.tree.root().id())
    }

    /// The `<body>` element, if the page has one
    pub fn body(&self) -> Option<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .find(|&id| self.element(id).is_some_and(|el| el.name() == "body"))
    }

    // === Construction ===

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        NodeId(self.html.tree.orphan(node::new_element(tag)).id())
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        NodeId(self.html.tree.orphan(node::new_text(text)).id())
    }

    /// Append `child` as the last child of `parent`, moving it if it is
    /// already attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        let parent_value = self.data(parent).ok_or(DomError::NodeNotFound(parent))?;
        if !matches!(parent_value, Node::Document | Node::Fragment | Node::Element(_)) {
            return Err(DomError::NotAContainer(parent));
        }
        self.data(child).ok_or(DomError::NodeNotFound(child))?;
        if child == self.root() || child == parent || self.ancestors(parent).contains(&child) {
            return Err(DomError::HierarchyCycle { parent, child });
        }

        if let Some(mut parent) = self.html.tree.get_mut(parent.0) {
            parent.append_id(child.0);
        }
        Ok(())
    }

    /// Remove a node from its parent. The subtree stays intact.
    pub fn detach(&mut self, node: NodeId) {
        if let Some(mut node) = self.html.tree.get_mut(node.0) {
            node.detach();
        }
    }

    /// Replace all children of `node` with a single text node
    pub fn set_text(&mut self, node: NodeId, text: &str) -> Result<()> {
        for child in self.children(node) {
            self.detach(child);
        }
        let text = self.create_text(text);
        self.append_child(node, text)
    }

    // === Navigation ===

    pub fn data(&self, id: NodeId) -> Option<&Node> {
        self.html.tree.get(id.0).map(|n| n.value())
    }

    pub fn element(&self, id: NodeId) -> Option<&Element> {
        self.data(id).and_then(Node::as_element)
    }

    /// The element as a `scraper` reference, for selector matching and serialization
    pub fn element_ref(&self, id: NodeId) -> Option<ElementRef<'_>> {
        self.html.tree.get(id.0).and_then(ElementRef::wrap)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.html.tree.get(id.0)?.parent().map(|p| NodeId(p.id()))
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.html
            .tree
            .get(id.0)
            .map(|n| n.children().map(|c| NodeId(c.id())).collect())
            .unwrap_or_default()
    }

    /// Ancestors from the parent up to the root
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        self.html
            .tree
            .get(id.0)
            .map(|n| n.ancestors().map(|a| NodeId(a.id())).collect())
            .unwrap_or_default()
    }

    /// Descendants in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        self.html
            .tree
            .get(id.0)
            .map(|n| n.descendants().skip(1).map(|d| NodeId(d.id())).collect())
            .unwrap_or_default()
    }

    /// Whether `node` is reachable from the document root
    pub fn is_connected(&self, node: NodeId) -> bool {
        node == self.root() || self.ancestors(node).last() == Some(&self.root())
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let Some(node) = self.html.tree.get(id.0) else {
            return String::new();
        };
        node.descendants()
            .filter_map(|n| n.value().as_text())
            .map(|text| &**text)
            .collect()
    }

    // === Attributes and classes ===

    pub fn attribute(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attr(name))
    }

    pub fn has_attribute(&self, id: NodeId, name: &str) -> bool {
        self.attribute(id, name).is_some()
    }

    pub fn set_attribute(&mut self, id: NodeId, name: &str, value: &str) {
        self.edit_element(id, AttrEdit::Set(name, value));
    }

    pub fn remove_attribute(&mut self, id: NodeId, name: &str) {
        self.edit_element(id, AttrEdit::Remove(name));
    }

    fn edit_element(&mut self, id: NodeId, edit: AttrEdit<'_>) {
        let Some(mut node) = self.html.tree.get_mut(id.0) else {
            return;
        };
        if let Node::Element(element) = node.value() {
            node::edit_attrs(element, edit);
        }
    }

    /// Set or clear a boolean attribute such as `hidden`
    pub fn toggle_attribute(&mut self, id: NodeId, name: &str, on: bool) {
        if on {
            self.set_attribute(id, name, "");
        } else {
            self.remove_attribute(id, name);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id)
            .is_some_and(|el| el.has_class(class, CaseSensitivity::CaseSensitive))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        self.toggle_class(id, class, true);
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        self.toggle_class(id, class, false);
    }

    /// Add the class when `on`, remove it otherwise. An emptied class
    /// list removes the attribute.
    pub fn toggle_class(&mut self, id: NodeId, class: &str, on: bool) {
        let Some(element) = self.element(id) else {
            return;
        };
        match node::toggled_class_list(element.attr("class"), class, on) {
            Some(list) if list.is_empty() => self.remove_attribute(id, "class"),
            Some(list) => self.set_attribute(id, "class", &list),
            None => {}
        }
    }

    // === Selectors ===

    pub fn matches(&self, id: NodeId, selector: &Selector) -> bool {
        self.element_ref(id).is_some_and(|el| selector.matches(&el))
    }

    /// First descendant of `scope` matching `selector`, in document order
    pub fn query_selector(&self, scope: NodeId, selector: &str) -> Result<Option<NodeId>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .find(|&n| self.matches(n, &selector)))
    }

    /// All descendants of `scope` matching `selector`, in document order
    pub fn query_selector_all(&self, scope: NodeId, selector: &str) -> Result<Vec<NodeId>> {
        let selector = parse_selector(selector)?;
        Ok(self
            .descendants(scope)
            .into_iter()
            .filter(|&n| self.matches(n, &selector))
            .collect())
    }

    /// Resolve a locator against the whole document
    pub fn find(&self, selector: &str) -> Result<Option<NodeId>> {
        self.query_selector(self.root(), selector)
    }

    /// Nearest ancestor-or-self of `id` matching `selector`
    pub fn closest(&self, id: NodeId, selector: &str) -> Result<Option<NodeId>> {
        let selector = parse_selector(selector)?;
        Ok(std::iter::once(id)
            .chain(self.ancestors(id))
            .find(|&n| self.matches(n, &selector)))
    }

    // === Events ===

    pub fn add_event_listener<F>(&mut self, node: NodeId, kind: EventKind, callback: F) -> ListenerId
    where
        F: Fn(&mut Document, &Event) + Send + Sync + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.entry(node).or_default().push(Registration {
            id,
            kind,
            callback: Arc::new(callback),
        });
        id
    }

    /// Remove a listener, returning whether it was registered
    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        let mut removed = false;
        for registrations in self.listeners.values_mut() {
            let before = registrations.len();
            registrations.retain(|r| r.id != id);
            removed |= registrations.len() != before;
        }
        removed
    }

    pub fn listener_count(&self, node: NodeId, kind: EventKind) -> usize {
        self.listeners
            .get(&node)
            .map(|regs| regs.iter().filter(|r| r.kind == kind).count())
            .unwrap_or(0)
    }

    /// Dispatch an event to `target` and, for bubbling kinds, its ancestors.
    ///
    /// Listeners run in registration order per node. A node's listener list
    /// is snapshotted when the event reaches it. Returns the number of
    /// listeners invoked.
    pub fn dispatch(&mut self, target: NodeId, kind: EventKind) -> usize {
        let path: Vec<NodeId> = if kind.bubbles() {
            std::iter::once(target).chain(self.ancestors(target)).collect()
        } else {
            vec![target]
        };

        let mut invoked = 0;
        for current_target in path {
            let callbacks: Vec<Listener> = match self.listeners.get(&current_target) {
                Some(regs) => regs
                    .iter()
                    .filter(|r| r.kind == kind)
                    .map(|r| Arc::clone(&r.callback))
                    .collect(),
                None => continue,
            };

            let event = Event {
                kind,
                target,
                current_target,
            };
            for callback in callbacks {
                callback(self, &event);
                invoked += 1;
            }
        }

        tracing::trace!(node = %target, kind = %kind, invoked, "Dispatched event");
        invoked
    }

    pub fn click(&mut self, target: NodeId) -> usize {
        self.dispatch(target, EventKind::Click)
    }

    pub fn pointer_enter(&mut self, target: NodeId) -> usize {
        self.dispatch(target, EventKind::PointerEnter)
    }

    pub fn pointer_leave(&mut self, target: NodeId) -> usize {
        self.dispatch(target, EventKind::PointerLeave)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| DomError::InvalidSelector(format!("{selector}: {e}")))
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.html.tree.nodes().count())
            .field("listeners", &self.listeners.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}
