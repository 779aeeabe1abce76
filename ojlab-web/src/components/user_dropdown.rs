use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::{models::app_state::AppState, routes::MainRoute, session::SessionStore};

/// Avatar menu of the signed-in user.
#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let (i18n, ..) = use_translation();
    let store = use_context::<SessionStore>();
    let session = use_selector(|state: &AppState| state.session.clone());
    let Some(user) = session.user.as_ref() else {
        return html! {};
    };

    let logout = Callback::from(move |event: yew::MouseEvent| {
        event.prevent_default();
        if let Some(store) = &store {
            store.logout();
        }
    });

    let admin_link = if session.is_admin() {
        html! {
            <li>
                <Link<MainRoute> to={MainRoute::AdminRoot}>
                    <i class="fa-solid fa-fw fa-gauge"></i>
                    {i18n.t("header.adminPanel")}
                </Link<MainRoute>>
            </li>
        }
    } else {
        html! {}
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle avatar placeholder">
                <div class="bg-neutral text-neutral-content w-8 rounded-full">
                    <span>{user.initial()}</span>
                </div>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-56">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{user.display_name()}</div>
                    if !user.email.is_empty() {
                        <div class="text-xs text-base-content/70 truncate">{&user.email}</div>
                    }
                </li>
                <div class="divider my-0"></div>
                {admin_link}
                <li>
                    <a onclick={logout}>
                        <i class="fa-solid fa-fw fa-right-from-bracket"></i>
                        {i18n.t("header.logout")}
                    </a>
                </li>
            </ul>
        </div>
    }
}
