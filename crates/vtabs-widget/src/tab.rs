//! Tab data structures
//!
//! Each tab displays:
//! - Title and text in the tab list
//! - An image in the content block
//! - An optional call-to-action link

use serde::{Deserialize, Serialize};

/// Input description of one tab
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    /// Image source, passed through to the `src` attribute untouched
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonSpec>,
}

impl TabSpec {
    pub fn new(title: impl Into<String>, text: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            image: image.into(),
            button: None,
        }
    }

    pub fn with_button(mut self, label: impl Into<String>, target: impl Into<String>) -> Self {
        self.button = Some(ButtonSpec {
            label: label.into(),
            target: target.into(),
        });
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub target: String,
}

/// Resolved button for a tab.
///
/// Tabs without a usable button still get a slot so that every per-tab
/// sequence stays index-aligned; the placeholder is never visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Button {
    Real { label: String, target: String },
    Placeholder,
}

impl Button {
    /// A real button needs both a non-empty label and a non-empty target
    pub fn from_spec(spec: Option<&ButtonSpec>) -> Self {
        match spec {
            Some(spec) if !spec.label.is_empty() && !spec.target.is_empty() => Button::Real {
                label: spec.label.clone(),
                target: spec.target.clone(),
            },
            _ => Button::Placeholder,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Button::Placeholder)
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            Button::Real { label, .. } => Some(label),
            Button::Placeholder => None,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Button::Real { target, .. } => Some(target),
            Button::Placeholder => None,
        }
    }
}
