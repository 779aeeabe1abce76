use i18nrs::yew::use_translation;
use yew::{Callback, function_component, html, use_effect_with, use_state_eq};

use crate::components::language_option::LanguageOption;
use crate::language;

#[function_component(LanguageSelector)]
pub fn language_selector() -> yew::Html {
    let (i18n, set_language) = use_translation();
    let language_state = use_state_eq(|| i18n.get_current_language().to_string());

    // Follow language changes made elsewhere, e.g. from the theme demo
    {
        let language_state = language_state.clone();
        use_effect_with(i18n.get_current_language().to_string(), move |current| {
            language_state.set(current.clone());
            || ()
        });
    }

    let on_select = {
        let language_state = language_state.clone();
        Callback::from(move |code: &'static str| {
            tracing::debug!(code, "language selected");
            language_state.set(code.to_string());
            set_language.emit(code.to_string());
        })
    };

    let active = language::get_language_info(language_state.as_str())
        .unwrap_or_else(language::default_language);
    let mut languages: Vec<_> = language::supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <span>{active.flag}</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
            {
                for languages.into_iter().map(|info| {
                    let key = info.code;
                    html! {
                        <LanguageOption
                            key={key}
                            selected={info.code == active.code}
                            language={info}
                            on_select={on_select.clone()}
                        />
                    }
                })
            }
            </ul>
        </div>
    }
}
