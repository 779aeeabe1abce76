use i18nrs::yew::use_translation;
use strum::IntoEnumIterator;
use yew::{Callback, Html, function_component, html, use_state_eq};
use yew_icons::{Icon, IconId};

use crate::theme::{ColorTheme, apply_color_theme, saved_color_theme};

/// Dropdown of colour themes; the choice is remembered by the browser.
#[function_component(ColorThemeSelector)]
pub fn color_theme_selector() -> Html {
    let (i18n, ..) = use_translation();
    let selected = use_state_eq(saved_color_theme);

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |theme: ColorTheme| {
            apply_color_theme(theme);
            selected.set(theme);
        })
    };

    html! {
        <div class="dropdown dropdown-end">
            <div
                tabindex="0"
                role="button"
                class="btn btn-ghost btn-circle mb-1"
                aria-label={i18n.t("theme.colorTheme")}
            >
                <Icon icon_id={IconId::HeroiconsOutlineSwatch} class="h-5 w-5" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-48">
            {
                for ColorTheme::iter().map(|theme| {
                    let on_select = on_select.clone();
                    let onclick = Callback::from(move |event: yew::MouseEvent| {
                        event.prevent_default();
                        on_select.emit(theme);
                    });
                    html! {
                        <li>
                            <a class={if *selected == theme { "active" } else { "" }} {onclick}>
                                <span
                                    class="h-4 w-4 rounded-full border border-base-content/20"
                                    style={format!("background-color: {}", theme.swatch())}
                                ></span>
                                {i18n.t(&theme.label_key())}
                            </a>
                        </li>
                    }
                })
            }
            </ul>
        </div>
    }
}
