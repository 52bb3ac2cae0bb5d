//! Panel display state
//!
//! ```text
//! Hidden  ──select──▶  Active
//!   ▲                    │
//!   └──select other──────┘
//! ```
//!
//! Every per-tab element is in exactly one of the two states, and at most
//! one tab is `Active` at a time.

use serde::{Deserialize, Serialize};

use vtabs_dom::{Document, NodeId};

use crate::hooks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Header highlighted, image, button and debug panel shown
    Active,
    /// Header plain, image, button and debug panel hidden
    Hidden,
}

impl PanelState {
    pub fn from_selected(selected: bool) -> Self {
        if selected {
            PanelState::Active
        } else {
            PanelState::Hidden
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, PanelState::Active)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Active => "active",
            PanelState::Hidden => "hidden",
        }
    }

    /// Header elements: `active` class
    pub(crate) fn apply_to_header(&self, document: &mut Document, header: NodeId) {
        document.toggle_class(header, hooks::ACTIVE, self.is_active());
    }

    /// Images and debug panels: `hidden` attribute
    pub(crate) fn apply_to_panel(&self, document: &mut Document, node: NodeId) {
        document.toggle_attribute(node, hooks::HIDDEN, !self.is_active());
    }

    /// Button slots: `show` / `hide` classes
    pub(crate) fn apply_to_button(&self, document: &mut Document, button: NodeId) {
        document.toggle_class(button, hooks::SHOW, self.is_active());
        document.toggle_class(button, hooks::HIDE, !self.is_active());
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PanelState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(PanelState::Active),
            "hidden" => Ok(PanelState::Hidden),
            _ => Err(format!("Unknown panel state: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selected() {
        assert_eq!(PanelState::from_selected(true), PanelState::Active);
        assert_eq!(PanelState::from_selected(false), PanelState::Hidden);
        assert!(PanelState::Active.is_active());
        assert!(!PanelState::Hidden.is_active());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Active".parse::<PanelState>(), Ok(PanelState::Active));
        assert_eq!(PanelState::Hidden.to_string().parse::<PanelState>(), Ok(PanelState::Hidden));
        assert!("shown".parse::<PanelState>().is_err());
    }

    #[test]
    fn test_apply_button_classes_are_exclusive() {
        let mut doc = Document::new();
        let a = doc.create_element("a");

        PanelState::Active.apply_to_button(&mut doc, a);
        assert!(doc.has_class(a, hooks::SHOW));
        assert!(!doc.has_class(a, hooks::HIDE));

        PanelState::Hidden.apply_to_button(&mut doc, a);
        assert!(!doc.has_class(a, hooks::SHOW));
        assert!(doc.has_class(a, hooks::HIDE));
    }

    #[test]
    fn test_apply_panel_hidden_attribute() {
        let mut doc = Document::new();
        let img = doc.create_element("img");

        PanelState::Hidden.apply_to_panel(&mut doc, img);
        assert_eq!(doc.attribute(img, hooks::HIDDEN), Some(""));

        PanelState::Active.apply_to_panel(&mut doc, img);
        assert_eq!(doc.attribute(img, hooks::HIDDEN), None);
    }
}
