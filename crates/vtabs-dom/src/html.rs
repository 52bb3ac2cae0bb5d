//! HTML import and serialization
//!
//! Host pages are parsed and written back with `scraper` (html5ever), so
//! raw-text elements, comments and the doctype survive unchanged.

use scraper::Html;

use crate::document::Document;
use crate::node::NodeId;

impl Document {
    /// Parse a full HTML page. Missing `<html>`, `<head>` and `<body>`
    /// elements are synthesized by the parser, which never fails.
    pub fn parse_html(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            tracing::debug!(errors = html.errors.len(), "Host page parsed with recoverable errors");
        }

        let doc = Document::from_tree(html);
        tracing::debug!(nodes = doc.descendants(doc.root()).len(), "Parsed host page");
        doc
    }

    /// Serialize everything attached to the root, doctype included
    pub fn to_html(&self) -> String {
        self.html.html()
    }

    /// Serialize an element and its subtree
    pub fn outer_html(&self, node: NodeId) -> Option<String> {
        self.element_ref(node).map(|el| el.html())
    }

    /// Serialize the children of an element
    pub fn inner_html(&self, node: NodeId) -> Option<String> {
        self.element_ref(node).map(|el| el.inner_html())
    }
}
