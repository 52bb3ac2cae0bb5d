//! VTabs Core
//!
//! Entry points for host code. A [`Page`] owns the host document and
//! exposes the two operations pages need: creating a vertical tab widget
//! and rotating it automatically. Failures are logged as warnings and
//! never propagate to the caller.

mod config;
mod error;
mod page;

pub use config::Config;
pub use error::CoreError;
pub use page::Page;

// Re-export the widget surface
pub use vtabs_cycle::{CycleError, CycleHandle, DEFAULT_INTERVAL};
pub use vtabs_dom::{Document, DomError, NodeId, SharedDocument};
pub use vtabs_widget::{
    hooks, Button, ButtonSpec, PanelState, Position, RenderedWidget, TabSpec, WidgetConfig,
    WidgetError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging to stderr. `RUST_LOG` wins over the configured filter.
///
/// Stdout is left to callers; the CLI writes rendered HTML there.
pub fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
