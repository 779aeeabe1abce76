//! Colour themes and dark mode.
//!
//! The colour theme is a `theme-{name}` class on `<html>` and is remembered
//! per browser under [`COLOR_THEME_KEY`]. Dark mode is the `data-theme`
//! attribute and is not persisted.

use gloo_storage::{LocalStorage, Storage};
use strum::{EnumIter, IntoEnumIterator};

/// Local-storage key of the selected colour theme.
pub const COLOR_THEME_KEY: &str = "color-theme";

const THEME_CLASS_PREFIX: &str = "theme-";
const MODE_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter)]
pub enum ColorTheme {
    #[default]
    Default,
    Slate,
    Gray,
    Zinc,
    Neutral,
    Stone,
    Red,
    Rose,
    Orange,
    Green,
    Blue,
    Yellow,
    Violet,
}

impl ColorTheme {
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Slate => "slate",
            Self::Gray => "gray",
            Self::Zinc => "zinc",
            Self::Neutral => "neutral",
            Self::Stone => "stone",
            Self::Red => "red",
            Self::Rose => "rose",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Violet => "violet",
        }
    }

    /// Swatch colour shown next to the theme name.
    pub fn swatch(self) -> &'static str {
        match self {
            Self::Default => "hsl(222.2, 84%, 4.9%)",
            Self::Slate => "hsl(215.4, 16.3%, 46.9%)",
            Self::Gray => "hsl(220.9, 39.3%, 11%)",
            Self::Zinc => "hsl(240, 10%, 3.9%)",
            Self::Neutral => "hsl(0, 0%, 3.9%)",
            Self::Stone => "hsl(20, 14.3%, 4.1%)",
            Self::Red => "hsl(0, 72.2%, 50.6%)",
            Self::Rose => "hsl(346.8, 77.2%, 49.8%)",
            Self::Orange => "hsl(24.6, 95%, 53.1%)",
            Self::Green => "hsl(142.1, 76.2%, 36.3%)",
            Self::Blue => "hsl(221.2, 83.2%, 53.3%)",
            Self::Yellow => "hsl(47.9, 95.8%, 53.1%)",
            Self::Violet => "hsl(262.1, 83.3%, 57.8%)",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|theme| theme.name() == name)
    }

    /// Class put on `<html>`; the default theme uses none.
    pub fn class_name(self) -> Option<String> {
        (self != Self::Default).then(|| format!("{THEME_CLASS_PREFIX}{}", self.name()))
    }

    /// Translation key of the theme's label.
    pub fn label_key(self) -> String {
        format!("theme.colors.{}", self.name())
    }
}

/// Light or dark rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

fn root_element() -> Option<web_sys::Element> {
    web_sys::window()?.document()?.document_element()
}

/// Colour theme remembered by this browser.
pub fn saved_color_theme() -> ColorTheme {
    LocalStorage::raw()
        .get_item(COLOR_THEME_KEY)
        .ok()
        .flatten()
        .and_then(|name| ColorTheme::from_name(&name))
        .unwrap_or_default()
}

fn set_theme_class(theme: ColorTheme) {
    let Some(root) = root_element() else {
        return;
    };
    let class_list = root.class_list();
    for other in ColorTheme::iter().filter_map(ColorTheme::class_name) {
        let _ = class_list.remove_1(&other);
    }
    if let Some(class) = theme.class_name() {
        if let Err(err) = class_list.add_1(&class) {
            tracing::warn!(?err, theme = theme.name(), "could not apply colour theme");
        }
    }
}

/// Switch the page to `theme` and remember the choice.
pub fn apply_color_theme(theme: ColorTheme) {
    set_theme_class(theme);
    if let Err(err) = LocalStorage::raw().set_item(COLOR_THEME_KEY, theme.name()) {
        tracing::warn!(?err, "could not persist colour theme");
    }
}

/// Re-apply the remembered colour theme at start-up.
pub fn restore_color_theme() {
    let theme = saved_color_theme();
    tracing::debug!(theme = theme.name(), "restoring colour theme");
    set_theme_class(theme);
}

/// Mode currently on `<html>`, falling back to the system preference.
pub fn current_mode() -> ThemeMode {
    let explicit = root_element()
        .and_then(|root| root.get_attribute(MODE_ATTRIBUTE))
        .and_then(|value| ThemeMode::parse(&value));
    explicit.unwrap_or_else(|| {
        let prefers_dark = web_sys::window()
            .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .is_some_and(|query| query.matches());
        if prefers_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    })
}

pub fn apply_mode(mode: ThemeMode) {
    if let Some(root) = root_element() {
        let _ = root.set_attribute(MODE_ATTRIBUTE, mode.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for theme in ColorTheme::iter() {
            assert_eq!(ColorTheme::from_name(theme.name()), Some(theme));
        }
        assert_eq!(ColorTheme::from_name("purple"), None);
        assert_eq!(ColorTheme::iter().count(), 13);
    }

    #[test]
    fn default_theme_has_no_class() {
        assert_eq!(ColorTheme::Default.class_name(), None);
        assert_eq!(ColorTheme::Rose.class_name().as_deref(), Some("theme-rose"));
    }

    #[test]
    fn label_keys_follow_names() {
        assert_eq!(ColorTheme::Violet.label_key(), "theme.colors.violet");
    }

    #[test]
    fn mode_toggles() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::parse("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse(""), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn root_classes() -> String {
        root_element().map(|root| root.class_name()).unwrap_or_default()
    }

    #[wasm_bindgen_test]
    fn applying_theme_swaps_class_and_persists() {
        apply_color_theme(ColorTheme::Blue);
        assert!(root_classes().contains("theme-blue"));
        assert_eq!(saved_color_theme(), ColorTheme::Blue);

        apply_color_theme(ColorTheme::Green);
        let classes = root_classes();
        assert!(classes.contains("theme-green"));
        assert!(!classes.contains("theme-blue"));

        apply_color_theme(ColorTheme::Default);
        assert!(!root_classes().contains("theme-"));
        assert_eq!(
            LocalStorage::raw().get_item(COLOR_THEME_KEY).ok().flatten().as_deref(),
            Some("default")
        );
    }

    #[wasm_bindgen_test]
    fn mode_is_written_to_root() {
        apply_mode(ThemeMode::Dark);
        assert_eq!(current_mode(), ThemeMode::Dark);
        apply_mode(ThemeMode::Light);
        assert_eq!(current_mode(), ThemeMode::Light);
    }
}
