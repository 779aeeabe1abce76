use crate::{
    components::{
        color_theme_selector::ColorThemeSelector, language_selector::LanguageSelector,
        theme_switcher::ThemeSwitcher, user_dropdown::UserDropdown,
    },
    models::app_state::AppState,
    routes::MainRoute,
    session::SessionStore,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Top bar of the public pages.
#[function_component(Header)]
pub fn header() -> Html {
    let (i18n, ..) = use_translation();
    let store = use_context::<SessionStore>();
    let session = use_selector(|state: &AppState| state.session.clone());

    let login = Callback::from(move |_: yew::MouseEvent| {
        if let Some(store) = &store {
            store.login();
        }
    });

    let account = if session.loading {
        html! { <span class="loading loading-spinner loading-sm text-primary"></span> }
    } else if session.is_authenticated() {
        html! { <UserDropdown /> }
    } else {
        html! {
            <button class="btn btn-primary btn-sm gap-2" onclick={login}>
                <i class="fa-brands fa-github"></i>
                {i18n.t("header.login")}
            </button>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-100/80 backdrop-blur border-b border-base-300 sticky top-0 z-50">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-2xl font-bold">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="flex items-center gap-1">
                <LanguageSelector />
                <ThemeSwitcher />
                <ColorThemeSelector />
                {account}
            </div>
        </nav>
    }
}
