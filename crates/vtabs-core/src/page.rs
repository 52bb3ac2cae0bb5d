//! Host page
//!
//! Owns the shared document. Every public operation degrades to a warning
//! plus "do nothing" instead of returning an error.

use std::time::Duration;

use vtabs_cycle::{advance, auto_cycle, CycleError, CycleHandle};
use vtabs_dom::{shared, Document, SharedDocument};
use vtabs_widget::{hooks, mount, select_tab, RenderedWidget, WidgetConfig};

use crate::config::Config;
use crate::Result;

pub struct Page {
    document: SharedDocument,
    config: Config,
}

impl Page {
    /// A page with an empty body
    pub fn new(config: Config) -> Self {
        Self::with_document(Document::new(), config)
    }

    pub fn from_html(html: &str, config: Config) -> Self {
        Self::with_document(Document::parse_html(html), config)
    }

    pub fn with_document(document: Document, config: Config) -> Self {
        Self {
            document: shared(document),
            config,
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render a vertical tab widget and select its first tab.
    ///
    /// Returns `None` (after a warning) when the container cannot be found.
    pub fn create_vertical_tabs(&self, options: WidgetConfig) -> Option<RenderedWidget> {
        let container = options.container.clone();
        match self.try_create_vertical_tabs(options) {
            Ok(widget) => Some(widget),
            Err(e) => {
                tracing::warn!(container = %container, error = %e, "Vertical tabs not created");
                None
            }
        }
    }

    fn try_create_vertical_tabs(&self, mut options: WidgetConfig) -> Result<RenderedWidget> {
        if self.config.debug {
            options.debug = true;
        }
        Ok(mount(&mut self.document.lock(), &options)?)
    }

    /// Rotate the tabs under `locator`, defaulting to the configured interval.
    ///
    /// Must be called inside a Tokio runtime. Returns `None` (after a
    /// warning) when nothing could be started.
    pub fn auto_cycle(&self, locator: &str, interval: Option<Duration>) -> Option<CycleHandle> {
        let interval = interval.unwrap_or_else(|| self.config.default_interval());
        match auto_cycle(&self.document, locator, interval) {
            Ok(handle) => Some(handle),
            Err(e) => {
                tracing::warn!(container = %locator, error = %e, "Auto-cycle not started");
                None
            }
        }
    }

    /// Run one auto-cycle step on the tabs under `locator` without a timer
    pub fn step_cycle(&self, locator: &str) -> Option<usize> {
        match self.try_step_cycle(locator) {
            Ok(next) => Some(next),
            Err(e) => {
                tracing::warn!(container = %locator, error = %e, "Auto-cycle step skipped");
                None
            }
        }
    }

    fn try_step_cycle(&self, locator: &str) -> Result<usize> {
        let mut doc = self.document.lock();
        let container = doc
            .find(locator)?
            .ok_or_else(|| CycleError::ContainerNotFound(locator.to_string()))?;
        let headers = doc.query_selector_all(container, hooks::ITEM_SELECTOR)?;
        let next = advance(&mut doc, &headers)
            .ok_or_else(|| CycleError::NoTabs(locator.to_string()))?;
        Ok(next)
    }

    pub fn select_tab(&self, widget: &RenderedWidget, index: usize) {
        select_tab(&mut self.document.lock(), widget, index);
    }

    pub fn to_html(&self) -> String {
        self.document.lock().to_html()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vtabs_widget::TabSpec;

    fn config(container: &str, tabs: usize) -> WidgetConfig {
        WidgetConfig::new(container)
            .tabs((0..tabs).map(|i| TabSpec::new(format!("T{i}"), "", format!("{i}.png"))))
    }

    #[test]
    fn test_missing_container_returns_none() {
        let page = Page::default();
        let before = page.to_html();
        assert!(page.create_vertical_tabs(config("#nope", 2)).is_none());
        assert_eq!(page.to_html(), before);
    }

    #[test]
    fn test_debug_config_forces_debug_panels() {
        let config_json = r#"{"debug": true}"#;
        let page = Page::from_html(r#"<div id="x"></div>"#, Config::from_json(config_json).unwrap());
        let widget = page.create_vertical_tabs(config("#x", 3)).unwrap();
        assert_eq!(widget.debug_panels().len(), 3);
    }

    #[test]
    fn test_step_cycle() {
        let page = Page::from_html(r#"<div id="x"></div>"#, Config::default());
        let widget = page.create_vertical_tabs(config("#x", 2)).unwrap();

        assert_eq!(page.step_cycle("#x"), Some(1));
        assert_eq!(widget.active_index(), Some(1));
        assert_eq!(page.step_cycle("#x"), Some(0));
        assert_eq!(page.step_cycle("#missing"), None);
    }

    #[test]
    fn test_step_cycle_without_tabs() {
        let page = Page::from_html(r#"<div id="x"></div>"#, Config::default());
        page.create_vertical_tabs(config("#x", 0)).unwrap();
        assert_eq!(page.step_cycle("#x"), None);
    }

    #[test]
    fn test_auto_cycle_outside_runtime_returns_none() {
        let page = Page::from_html(r#"<div id="x"></div>"#, Config::default());
        page.create_vertical_tabs(config("#x", 2)).unwrap();
        assert!(page.auto_cycle("#x", None).is_none());
    }
}
