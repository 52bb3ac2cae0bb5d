//! VTabs Host Document
//!
//! The page the widget renders into: a `scraper` HTML tree that can be
//! edited in place, queried with CSS selectors and serialized back out.
//! Events are dispatched to listeners registered on nodes, with click
//! bubbling to ancestors and pointer enter/leave delivered to the target only.

mod document;
mod error;
mod event;
mod html;
mod node;

use parking_lot::Mutex;
use std::sync::Arc;

pub use document::Document;
pub use error::DomError;
pub use event::{Event, EventKind, Listener, ListenerId};
pub use node::NodeId;
pub use scraper::node::Element;
pub use scraper::{ElementRef, Node, Selector};

pub type Result<T> = std::result::Result<T, DomError>;

/// Document shared between the widget, its listeners and timer tasks.
///
/// Holding the lock is the equivalent of running on the page's event queue:
/// every dispatch and every timer tick completes before the next begins.
pub type SharedDocument = Arc<Mutex<Document>>;

/// Wrap a document for shared use
pub fn shared(document: Document) -> SharedDocument {
    Arc::new(Mutex::new(document))
}
