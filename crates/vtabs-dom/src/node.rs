//! Document nodes
//!
//! Nodes are `scraper` nodes stored in the page's `ego_tree`. Elements are
//! immutable once built, so attribute edits rebuild the element in place.

use std::fmt;

use html5ever::tendril::StrTendril;
use html5ever::{ns, Attribute, LocalName, QualName};
use scraper::node::{Element, Text};
use scraper::Node;

/// Handle to a node inside a [`crate::Document`].
///
/// Handles are only meaningful for the document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) ego_tree::NodeId);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<ego_tree::NodeId> for NodeId {
    fn from(id: ego_tree::NodeId) -> Self {
        NodeId(id)
    }
}

/// A new HTML element with no attributes
pub(crate) fn new_element(tag: &str) -> Node {
    let name = QualName::new(None, ns!(html), LocalName::from(tag.to_ascii_lowercase()));
    Node::Element(Element::new(name, Vec::new()))
}

pub(crate) fn new_text(text: &str) -> Node {
    Node::Text(Text {
        text: scraper::StrTendril::from(text),
    })
}

/// Attribute edits on an element, applied by rebuilding it.
///
/// Names are matched in the null namespace, the one HTML attributes use.
pub(crate) enum AttrEdit<'a> {
    Set(&'a str, &'a str),
    Remove(&'a str),
}

/// Apply `edit` to `element`, returning whether anything changed
pub(crate) fn edit_attrs(element: &mut Element, edit: AttrEdit<'_>) -> bool {
    let mut attrs: Vec<Attribute> = element
        .attrs
        .iter()
        .map(|(name, value)| Attribute {
            name: name.clone(),
            value: StrTendril::from(&**value),
        })
        .collect();

    let is_named = |attr: &Attribute, name: &str| attr.name.ns == ns!() && &*attr.name.local == name;
    let changed = match edit {
        AttrEdit::Set(name, value) => {
            let name = name.to_ascii_lowercase();
            match attrs.iter_mut().find(|a| is_named(a, &name)) {
                Some(existing) if &*existing.value == value => false,
                Some(existing) => {
                    existing.value = StrTendril::from(value);
                    true
                }
                None => {
                    attrs.push(Attribute {
                        name: QualName::new(None, ns!(), LocalName::from(name)),
                        value: StrTendril::from(value),
                    });
                    true
                }
            }
        }
        AttrEdit::Remove(name) => {
            let before = attrs.len();
            attrs.retain(|a| !is_named(a, name));
            attrs.len() != before
        }
    };

    if changed {
        // Rebuilding resets the element's cached id and class list
        *element = Element::new(element.name.clone(), attrs);
    }
    changed
}

/// Class list with `class` toggled, or `None` if unchanged
pub(crate) fn toggled_class_list(current: Option<&str>, class: &str, on: bool) -> Option<String> {
    let mut classes: Vec<&str> = current.unwrap_or_default().split_ascii_whitespace().collect();
    if classes.contains(&class) == on {
        return None;
    }
    if on {
        classes.push(class);
    } else {
        classes.retain(|c| *c != class);
    }
    Some(classes.join(" "))
}
