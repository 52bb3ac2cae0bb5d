//! Widget builder
//!
//! Renders a [`WidgetConfig`] into the host document:
//!
//! ```text
//! div.vtabs[data-position]
//!   nav.vtabs__nav
//!     ul.vtabs__list
//!       li.vtabs__item[data-index]   h3.vtabs__title, p.vtabs__text
//!   div.vtabs__content
//!     img.vtabs__image               per tab, in order
//!     a.vtabs__button
//!     div.vtabs__debug               debug mode only
//! ```
//!
//! With `position: right` the content block comes before the navigation.

use uuid::Uuid;

use vtabs_dom::{Document, NodeId};

use crate::config::{Position, WidgetConfig};
use crate::error::WidgetError;
use crate::hooks;
use crate::state::PanelState;
use crate::tab::{Button, TabSpec};
use crate::widget::{ButtonSlot, RenderedWidget, TabPanel};
use crate::Result;

/// Build the widget into the element matched by `config.container`.
///
/// Every tab starts hidden; no tab is selected. Fails without touching the
/// document when the container cannot be found.
pub fn build(document: &mut Document, config: &WidgetConfig) -> Result<RenderedWidget> {
    let container = document
        .find(&config.container)?
        .ok_or_else(|| WidgetError::ContainerNotFound(config.container.clone()))?;

    let id = Uuid::new_v4().to_string();

    let root = element(document, "div", hooks::WRAPPER);
    document.set_attribute(root, hooks::DATA_POSITION, config.position.as_str());
    document.set_attribute(root, hooks::DATA_WIDGET_ID, &id);

    let nav = element(document, "nav", hooks::NAV);
    let tab_list = element(document, "ul", hooks::LIST);
    document.append_child(nav, tab_list)?;

    let content = element(document, "div", hooks::CONTENT);
    if config.debug {
        document.add_class(content, hooks::CONTENT_DEBUG);
        document.set_attribute(content, "style", "position: relative");
    }

    let mut panels = Vec::with_capacity(config.tabs.len());
    for (index, tab) in config.tabs.iter().enumerate() {
        let header = build_header(document, index, tab)?;
        document.append_child(tab_list, header)?;

        let image = build_image(document, tab);
        document.append_child(content, image)?;

        let button = build_button(document, Button::from_spec(tab.button.as_ref()))?;
        document.append_child(content, button.node)?;

        let debug_panel = if config.debug {
            let panel = build_debug_panel(document, index, tab, &button.button)?;
            document.append_child(content, panel)?;
            Some(panel)
        } else {
            None
        };

        let panel = TabPanel {
            header,
            image,
            button,
            debug_panel,
        };
        panel.apply(document, PanelState::Hidden);
        panels.push(panel);
    }

    match config.position {
        Position::Left => {
            document.append_child(root, nav)?;
            document.append_child(root, content)?;
        }
        Position::Right => {
            document.append_child(root, content)?;
            document.append_child(root, nav)?;
        }
    }
    document.append_child(container, root)?;

    tracing::info!(
        widget_id = %id,
        container = %config.container,
        tabs = panels.len(),
        position = %config.position,
        debug = config.debug,
        "Built vertical tabs"
    );

    Ok(RenderedWidget::new(
        id,
        root,
        tab_list,
        content,
        config.position,
        panels,
        config.debug,
    ))
}

fn element(document: &mut Document, tag: &str, class: &str) -> NodeId {
    let node = document.create_element(tag);
    document.add_class(node, class);
    node
}

fn text_element(document: &mut Document, tag: &str, class: &str, text: &str) -> Result<NodeId> {
    let node = element(document, tag, class);
    document.set_text(node, text)?;
    Ok(node)
}

fn build_header(document: &mut Document, index: usize, tab: &TabSpec) -> Result<NodeId> {
    let header = element(document, "li", hooks::ITEM);
    document.set_attribute(header, hooks::DATA_INDEX, &index.to_string());

    let title = text_element(document, "h3", hooks::ITEM_TITLE, &tab.title)?;
    let text = text_element(document, "p", hooks::ITEM_TEXT, &tab.text)?;
    document.append_child(header, title)?;
    document.append_child(header, text)?;
    Ok(header)
}

fn build_image(document: &mut Document, tab: &TabSpec) -> NodeId {
    let image = element(document, "img", hooks::IMAGE);
    document.set_attribute(image, "src", &tab.image);
    document.set_attribute(image, "alt", &tab.title);
    image
}

fn build_button(document: &mut Document, button: Button) -> Result<ButtonSlot> {
    let node = element(document, "a", hooks::BUTTON);
    match &button {
        Button::Real { label, target } => {
            document.set_attribute(node, "href", target);
            document.set_text(node, label)?;
        }
        Button::Placeholder => {
            // Same shape as a real link so the layout does not shift
            document.add_class(node, hooks::BUTTON_PLACEHOLDER);
            document.set_attribute(node, "aria-hidden", "true");
            document.set_attribute(node, "style", "visibility: hidden");
            document.set_text(node, hooks::PLACEHOLDER_TEXT)?;
        }
    }
    Ok(ButtonSlot { node, button })
}

fn build_debug_panel(
    document: &mut Document,
    index: usize,
    tab: &TabSpec,
    button: &Button,
) -> Result<NodeId> {
    let panel = element(document, "div", hooks::DEBUG_PANEL);
    let lines = [
        format!("Index: {index}"),
        format!("Image: {}", tab.image),
        format!("Button: {}", button.label().unwrap_or(hooks::NO_BUTTON)),
    ];
    for line in lines {
        let p = document.create_element("p");
        document.set_text(p, &line)?;
        document.append_child(panel, p)?;
    }
    Ok(panel)
}
