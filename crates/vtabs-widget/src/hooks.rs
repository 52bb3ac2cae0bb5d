//! Markup hooks
//!
//! Class names and attributes external stylesheets target. Renaming any of
//! these breaks existing pages.

/// Root wrapper, carries [`DATA_POSITION`]
pub const WRAPPER: &str = "vtabs";
pub const NAV: &str = "vtabs__nav";
pub const LIST: &str = "vtabs__list";
pub const ITEM: &str = "vtabs__item";
pub const ITEM_TITLE: &str = "vtabs__title";
pub const ITEM_TEXT: &str = "vtabs__text";
pub const CONTENT: &str = "vtabs__content";
/// Added to the content block in debug mode
pub const CONTENT_DEBUG: &str = "vtabs__content--debug";
pub const IMAGE: &str = "vtabs__image";
pub const BUTTON: &str = "vtabs__button";
pub const BUTTON_PLACEHOLDER: &str = "vtabs__button--placeholder";
pub const DEBUG_PANEL: &str = "vtabs__debug";

/// State class on the active header
pub const ACTIVE: &str = "active";
/// Button slot state classes
pub const SHOW: &str = "show";
pub const HIDE: &str = "hide";
/// Boolean attribute on hidden images and debug panels
pub const HIDDEN: &str = "hidden";

pub const DATA_POSITION: &str = "data-position";
pub const DATA_INDEX: &str = "data-index";
pub const DATA_WIDGET_ID: &str = "data-vtabs-id";

pub const ITEM_SELECTOR: &str = ".vtabs__item";
pub const ACTIVE_ITEM_SELECTOR: &str = ".vtabs__item.active";

/// Text of placeholder links
pub const PLACEHOLDER_TEXT: &str = "Placeholder";
/// Debug panel value when a tab has no real button
pub const NO_BUTTON: &str = "None";
