pub(crate) mod error_alert;
pub(crate) mod form_field;
pub(crate) mod header_nav_item;
pub(crate) mod language_option;
pub(crate) mod language_selector;
pub(crate) mod loading;
pub(crate) mod status_badge;
pub(crate) mod theme_switcher;
pub(crate) mod user_dropdown;
