//! Auto-cycle error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Container not found: {0}")]
    ContainerNotFound(String),

    #[error("No tabs found in {0}")]
    NoTabs(String),

    #[error("Cycle interval must be greater than zero")]
    InvalidInterval,

    #[error("Auto-cycle requires a running Tokio runtime")]
    NoRuntime,

    #[error("Document error: {0}")]
    Dom(#[from] vtabs_dom::DomError),
}
