pub(crate) mod admin_guard;
pub(crate) mod color_theme_selector;
pub(crate) mod confirm_dialog;
pub(crate) mod language_option;
pub(crate) mod language_selector;
pub(crate) mod loading;
pub(crate) mod sidebar_nav_item;
pub(crate) mod theme_switcher;
pub(crate) mod user_dropdown;
