use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

use crate::language::LanguageInfo;

#[derive(Properties, PartialEq)]
pub struct LanguageOptionProps {
    pub language: LanguageInfo,
    /// The language the console is currently shown in.
    pub selected: bool,
    /// Receives the language code.
    pub on_select: Callback<&'static str>,
}

/// One entry of the language dropdown.
#[function_component(LanguageOption)]
pub fn language_option(props: &LanguageOptionProps) -> Html {
    let language = &props.language;
    let code = language.code;
    let onclick = props.on_select.reform(move |event: MouseEvent| {
        event.prevent_default();
        code
    });

    html! {
        <li>
            <button
                type="button"
                class={classes!("justify-between", props.selected.then_some("active"))}
                aria-current={props.selected.then_some("true")}
                lang={code}
                {onclick}
            >
                <span class="flex items-center gap-2">
                    <span aria-hidden="true">{language.flag}</span>
                    {language.native_name}
                </span>
                <span class="badge badge-ghost badge-sm font-mono">{code}</span>
            </button>
        </li>
    }
}
