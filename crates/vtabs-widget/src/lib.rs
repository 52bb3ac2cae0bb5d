//! VTabs Widget
//!
//! A vertical tab switcher: a list of titled items next to a content block
//! holding one image and one call-to-action link per item. Exactly one item
//! is active at a time; selecting an item toggles every per-tab element in
//! one pass.
//!
//! - [`build`] renders a [`WidgetConfig`] into a host [`vtabs_dom::Document`]
//! - [`attach`] wires click delegation and selects the first tab
//! - [`select_tab`] switches the active tab

mod builder;
mod config;
mod controller;
mod error;
pub mod hooks;
mod state;
mod tab;
mod widget;

pub use builder::build;
pub use config::{Position, WidgetConfig};
pub use controller::{attach, mount, select_tab};
pub use error::WidgetError;
pub use state::PanelState;
pub use tab::{Button, ButtonSpec, TabSpec};
pub use widget::{ButtonSlot, RenderedWidget, TabPanel};

pub type Result<T> = std::result::Result<T, WidgetError>;
