//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Widget error: {0}")]
    Widget(#[from] vtabs_widget::WidgetError),

    #[error("Auto-cycle error: {0}")]
    Cycle(#[from] vtabs_cycle::CycleError),

    #[error("Document error: {0}")]
    Dom(#[from] vtabs_dom::DomError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}
