//! Widget configuration

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tab::TabSpec;
use crate::Result;

/// Which side of the content block the tab list sits on.
///
/// Only affects visual order; indices and interaction are the same.
/// Names are matched case-insensitively and anything other than `right`
/// resolves to `Left`, both when parsing and when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Position {
    #[default]
    Left,
    Right,
}

impl Position {
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("right") {
            Position::Right
        } else {
            Position::Left
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Left => "left",
            Position::Right => "right",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for Position {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl std::str::FromStr for Position {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Selector of the element the widget is appended to
    pub container: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub tabs: Vec<TabSpec>,
    /// Render per-tab debug panels
    #[serde(default)]
    pub debug: bool,
}

impl WidgetConfig {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            position: Position::default(),
            tabs: Vec::new(),
            debug: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn tab(mut self, tab: TabSpec) -> Self {
        self.tabs.push(tab);
        self
    }

    pub fn tabs(mut self, tabs: impl IntoIterator<Item = TabSpec>) -> Self {
        self.tabs.extend(tabs);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
