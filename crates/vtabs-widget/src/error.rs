//! Widget error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("Document error: {0}")]
    Dom(#[from] vtabs_dom::DomError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
