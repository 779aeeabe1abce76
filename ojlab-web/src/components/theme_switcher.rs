use i18nrs::yew::use_translation;
use yew::{Callback, Classes, Html, Properties, function_component, html, use_effect_with, use_state};
use yew_icons::{Icon, IconId};

use crate::theme::{ThemeMode, apply_mode, current_mode};

#[derive(Properties, PartialEq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Dark/light toggle.
#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let (i18n, ..) = use_translation();
    let mode = use_state(|| ThemeMode::Dark);

    // Pick up the attribute or the system preference once mounted
    {
        let mode = mode.clone();
        use_effect_with((), move |()| {
            let initial = current_mode();
            apply_mode(initial);
            mode.set(initial);
            || {}
        });
    }

    let toggle_theme = {
        let mode = mode.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let next = mode.toggled();
            apply_mode(next);
            mode.set(next);
        })
    };

    // Sun in dark mode (switch to light), moon in light mode
    let theme_icon = match *mode {
        ThemeMode::Light => IconId::HeroiconsSolidMoon,
        ThemeMode::Dark => IconId::HeroiconsSolidSun,
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label={i18n.t("theme.toggleMode")}
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
