//! Selection controller
//!
//! One click listener on the tab list handles every header, including
//! headers added after construction. Clicks that do not land inside a
//! header, or land on one without a usable index, are ignored.

use vtabs_dom::{Document, Event, EventKind, ListenerId, NodeId};

use crate::builder::build;
use crate::config::WidgetConfig;
use crate::hooks;
use crate::state::PanelState;
use crate::widget::RenderedWidget;
use crate::Result;

/// Make tab `index` the active one.
///
/// Idempotent. An index past the end matches no tab, so every tab ends up
/// hidden and the active index is cleared.
pub fn select_tab(document: &mut Document, widget: &RenderedWidget, index: usize) {
    for (i, panel) in widget.panels().iter().enumerate() {
        panel.apply(document, PanelState::from_selected(i == index));
    }

    let active = (index < widget.len()).then_some(index);
    widget.set_active_index(active);

    tracing::debug!(widget_id = %widget.id(), index, matched = active.is_some(), "Selected tab");
}

/// Attach click delegation to the tab list and select the first tab.
pub fn attach(document: &mut Document, widget: &RenderedWidget) -> ListenerId {
    let handle = widget.clone();
    let listener = document.add_event_listener(
        widget.tab_list(),
        EventKind::Click,
        move |document: &mut Document, event: &Event| {
            if let Some(index) = clicked_index(document, event.target) {
                select_tab(document, &handle, index);
            }
        },
    );

    select_tab(document, widget, 0);
    listener
}

/// Build the widget, attach the controller and select the first tab
pub fn mount(document: &mut Document, config: &WidgetConfig) -> Result<RenderedWidget> {
    let widget = build(document, config)?;
    attach(document, &widget);
    Ok(widget)
}

/// Index stored on the header enclosing `target`
fn clicked_index(document: &Document, target: NodeId) -> Option<usize> {
    let header = document.closest(target, hooks::ITEM_SELECTOR).ok().flatten()?;
    let raw = document.attribute(header, hooks::DATA_INDEX)?;
    match raw.trim().parse::<usize>() {
        Ok(index) => Some(index),
        Err(_) => {
            tracing::trace!(value = raw, "Ignoring click on header with unusable index");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::TabSpec;

    fn mounted(n: usize, debug: bool) -> (Document, RenderedWidget) {
        let mut doc = Document::parse_html(r#"<div id="x"></div>"#);
        let tabs = (0..n).map(|i| {
            let spec = TabSpec::new(format!("T{i}"), "", format!("{i}.png"));
            // every other tab without a button
            if i % 2 == 0 {
                spec.with_button("Go", "/go")
            } else {
                spec
            }
        });
        let config = WidgetConfig::new("#x").tabs(tabs).debug(debug);
        let widget = mount(&mut doc, &config).unwrap();
        (doc, widget)
    }

    /// Asserts exactly one entry of every per-tab sequence is on, at `index`
    fn assert_selected(doc: &Document, widget: &RenderedWidget, index: usize) {
        assert_eq!(widget.active_index(), Some(index));
        for (i, panel) in widget.panels().iter().enumerate() {
            let expected = i == index;
            assert_eq!(panel.is_active(doc), expected, "header {i}");
            assert_eq!(panel.is_image_visible(doc), expected, "image {i}");
            assert_eq!(panel.button.is_shown(doc), expected, "button {i}");
            if widget.is_debug() {
                assert_eq!(panel.is_debug_visible(doc), expected, "debug {i}");
            }
        }
    }

    #[test]
    fn test_first_tab_selected_on_mount() {
        for debug in [false, true] {
            let (doc, widget) = mounted(3, debug);
            assert_selected(&doc, &widget, 0);
        }
    }

    #[test]
    fn test_mount_with_no_tabs() {
        let (doc, widget) = mounted(0, false);
        assert!(widget.is_empty());
        assert_eq!(widget.active_index(), None);
        assert_eq!(doc.listener_count(widget.tab_list(), EventKind::Click), 1);
    }

    #[test]
    fn test_select_every_index() {
        let (mut doc, widget) = mounted(4, true);
        for i in 0..4 {
            select_tab(&mut doc, &widget, i);
            assert_selected(&doc, &widget, i);
        }
    }

    #[test]
    fn test_select_is_idempotent() {
        let (mut doc, widget) = mounted(3, true);
        select_tab(&mut doc, &widget, 2);
        let once = doc.to_html();
        select_tab(&mut doc, &widget, 2);
        assert_eq!(doc.to_html(), once);
        assert_selected(&doc, &widget, 2);
    }

    #[test]
    fn test_out_of_range_deactivates_everything() {
        let (mut doc, widget) = mounted(3, false);
        select_tab(&mut doc, &widget, 9);

        assert_eq!(widget.active_index(), None);
        for panel in widget.panels() {
            assert!(!panel.is_active(&doc));
            assert!(!panel.is_image_visible(&doc));
            assert!(!panel.button.is_shown(&doc));
        }
    }

    #[test]
    fn test_placeholder_never_visible() {
        let (mut doc, widget) = mounted(2, false);
        select_tab(&mut doc, &widget, 1);

        let slot = &widget.panels()[1].button;
        assert!(slot.button.is_placeholder());
        assert!(slot.is_shown(&doc));
        assert!(!slot.is_visible(&doc));

        select_tab(&mut doc, &widget, 0);
        assert!(widget.panels()[0].button.is_visible(&doc));
    }

    #[test]
    fn test_click_on_header_child_selects() {
        let (mut doc, widget) = mounted(3, false);
        let title = doc.children(widget.headers()[2])[0];

        doc.click(title);
        assert_selected(&doc, &widget, 2);

        doc.click(widget.headers()[1]);
        assert_selected(&doc, &widget, 1);
    }

    #[test]
    fn test_click_outside_headers_ignored() {
        let (mut doc, widget) = mounted(3, false);
        select_tab(&mut doc, &widget, 1);

        doc.click(widget.tab_list());
        assert_selected(&doc, &widget, 1);

        // Clicks in the content block never reach the list listener
        doc.click(widget.images()[0]);
        assert_selected(&doc, &widget, 1);
    }

    #[test]
    fn test_unusable_index_ignored() {
        let (mut doc, widget) = mounted(3, false);
        let headers = widget.headers();

        doc.set_attribute(headers[2], hooks::DATA_INDEX, "two");
        doc.click(headers[2]);
        assert_selected(&doc, &widget, 0);

        doc.remove_attribute(headers[2], hooks::DATA_INDEX);
        doc.click(headers[2]);
        assert_selected(&doc, &widget, 0);
    }

    #[test]
    fn test_headers_added_later_are_clickable() {
        let (mut doc, widget) = mounted(3, false);

        let late = doc.create_element("li");
        doc.add_class(late, hooks::ITEM);
        doc.set_attribute(late, hooks::DATA_INDEX, "1");
        doc.append_child(widget.tab_list(), late).unwrap();

        doc.click(late);
        assert_selected(&doc, &widget, 1);
    }

    #[test]
    fn test_clones_share_active_index() {
        let (mut doc, widget) = mounted(3, false);
        let other = widget.clone();
        select_tab(&mut doc, &other, 2);
        assert_eq!(widget.active_index(), Some(2));
    }

    #[test]
    fn test_widgets_are_independent() {
        let mut doc =
            Document::parse_html(r#"<div id="a"></div><div id="b"></div>"#);
        let tabs = || (0..2).map(|i| TabSpec::new(format!("T{i}"), "", ""));
        let a = mount(&mut doc, &WidgetConfig::new("#a").tabs(tabs())).unwrap();
        let b = mount(&mut doc, &WidgetConfig::new("#b").tabs(tabs())).unwrap();

        doc.click(b.headers()[1]);
        assert_selected(&doc, &b, 1);
        assert_selected(&doc, &a, 0);
    }
}
