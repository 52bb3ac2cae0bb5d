//! Events and listeners

use std::fmt;
use std::sync::Arc;

use crate::document::Document;
use crate::node::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Bubbles from the target up to the document root
    Click,
    /// Delivered to the target only
    PointerEnter,
    /// Delivered to the target only
    PointerLeave,
}

impl EventKind {
    pub fn bubbles(&self) -> bool {
        matches!(self, EventKind::Click)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::PointerEnter => "pointerenter",
            EventKind::PointerLeave => "pointerleave",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Node the event was dispatched to
    pub target: NodeId,
    /// Node whose listener is currently running
    pub current_target: NodeId,
}

/// Listener callback. Runs with exclusive access to the document.
pub type Listener = Arc<dyn Fn(&mut Document, &Event) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

pub(crate) struct Registration {
    pub(crate) id: ListenerId,
    pub(crate) kind: EventKind,
    pub(crate) callback: Listener,
}
