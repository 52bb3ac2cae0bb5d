//! Rendered widget handles

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

use vtabs_dom::{Document, NodeId};

use crate::config::Position;
use crate::hooks;
use crate::state::PanelState;
use crate::tab::Button;

/// A tab's link slot. Placeholders keep the slot present but never visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonSlot {
    pub node: NodeId,
    pub button: Button,
}

impl ButtonSlot {
    /// Whether the slot is in its shown form (regardless of placeholder)
    pub fn is_shown(&self, document: &Document) -> bool {
        document.has_class(self.node, hooks::SHOW)
    }

    /// Whether a user can actually see the link
    pub fn is_visible(&self, document: &Document) -> bool {
        !self.button.is_placeholder() && self.is_shown(document)
    }
}

/// Everything rendered for one tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    pub header: NodeId,
    pub image: NodeId,
    pub button: ButtonSlot,
    /// Present only in debug mode
    pub debug_panel: Option<NodeId>,
}

impl TabPanel {
    pub(crate) fn apply(&self, document: &mut Document, state: PanelState) {
        state.apply_to_header(document, self.header);
        state.apply_to_panel(document, self.image);
        state.apply_to_button(document, self.button.node);
        if let Some(debug_panel) = self.debug_panel {
            state.apply_to_panel(document, debug_panel);
        }
    }

    pub fn is_active(&self, document: &Document) -> bool {
        document.has_class(self.header, hooks::ACTIVE)
    }

    pub fn is_image_visible(&self, document: &Document) -> bool {
        !document.has_attribute(self.image, hooks::HIDDEN)
    }

    pub fn is_debug_visible(&self, document: &Document) -> bool {
        self.debug_panel
            .is_some_and(|node| !document.has_attribute(node, hooks::HIDDEN))
    }
}

/// Handles to a widget rendered into a document.
///
/// Cloning is cheap and clones share the active index.
#[derive(Debug, Clone)]
pub struct RenderedWidget {
    id: String,
    root: NodeId,
    tab_list: NodeId,
    content: NodeId,
    position: Position,
    panels: Arc<[TabPanel]>,
    debug: bool,
    active: Arc<Mutex<Option<usize>>>,
    created_at: DateTime<Utc>,
}

impl RenderedWidget {
    pub(crate) fn new(
        id: String,
        root: NodeId,
        tab_list: NodeId,
        content: NodeId,
        position: Position,
        panels: Vec<TabPanel>,
        debug: bool,
    ) -> Self {
        Self {
            id,
            root,
            tab_list,
            content,
            position,
            panels: panels.into(),
            debug,
            active: Arc::new(Mutex::new(None)),
            created_at: Utc::now(),
        }
    }

    /// Unique identifier, also written to the root element
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-level wrapper appended to the container
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The `ul` holding the headers; carries the click listener
    pub fn tab_list(&self) -> NodeId {
        self.tab_list
    }

    pub fn content(&self) -> NodeId {
        self.content
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    pub fn headers(&self) -> Vec<NodeId> {
        self.panels.iter().map(|p| p.header).collect()
    }

    pub fn images(&self) -> Vec<NodeId> {
        self.panels.iter().map(|p| p.image).collect()
    }

    pub fn buttons(&self) -> Vec<&ButtonSlot> {
        self.panels.iter().map(|p| &p.button).collect()
    }

    /// Empty unless debug mode was enabled
    pub fn debug_panels(&self) -> Vec<NodeId> {
        self.panels.iter().filter_map(|p| p.debug_panel).collect()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Index of the selected tab, `None` before the first selection or
    /// after selecting an index past the end
    pub fn active_index(&self) -> Option<usize> {
        *self.active.lock()
    }

    pub(crate) fn set_active_index(&self, index: Option<usize>) {
        *self.active.lock() = index;
    }
}
