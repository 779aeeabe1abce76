use crate::{
    components::{
        color_theme_selector::ColorThemeSelector, language_selector::LanguageSelector,
        sidebar_nav_item::SidebarNavItem, theme_switcher::ThemeSwitcher,
    },
    models::app_state::AppState,
    routes::{AdminRoute, AdminSection, MainRoute},
    session::SessionStore,
};
use i18nrs::yew::use_translation;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub children: Children,
    pub current_route: AdminRoute,
}

/// Frame of the admin console: sidebar navigation, top bar, content.
#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let store = use_context::<SessionStore>();
    let user = use_selector(|state: &AppState| state.session.user.clone());

    let logout = Callback::from(move |event: yew::MouseEvent| {
        event.prevent_default();
        if let Some(store) = &store {
            store.logout();
        }
    });

    let sections = AdminSection::iter().map(|section| {
        html! {
            <li>
                <h2 class="menu-title">{i18n.t(section.title_key())}</h2>
                <ul>
                    { for section.routes().into_iter().map(|route| html! {
                        <SidebarNavItem {route} current_route={props.current_route.clone()} />
                    }) }
                </ul>
            </li>
        }
    });

    let (name, email, initial) = (*user).as_ref().map_or_else(
        || {
            (
                i18n.t("layout.adminName"),
                i18n.t("layout.adminEmail"),
                'A',
            )
        },
        |user| {
            (
                user.display_name().to_string(),
                user.email.clone(),
                user.initial(),
            )
        },
    );

    html! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-100">
            <input id="admin-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <nav class="navbar bg-base-100 border-b border-base-300 gap-2">
                    <label for="admin-drawer" class="btn btn-ghost btn-square lg:hidden">
                        <i class="fa-solid fa-bars text-lg"></i>
                    </label>
                    <span class="flex-1 text-lg font-semibold">
                        {i18n.t(props.current_route.title_key())}
                    </span>
                    <LanguageSelector />
                    <ThemeSwitcher />
                    <ColorThemeSelector />
                </nav>
                <main class="flex-grow p-6">
                    {props.children.clone()}
                </main>
            </div>
            <div class="drawer-side z-40">
                <label for="admin-drawer" class="drawer-overlay"></label>
                <aside class="bg-base-200 min-h-full w-64 flex flex-col">
                    <Link<MainRoute> to={MainRoute::Home} classes="flex items-center gap-2 p-4">
                        <i class="fa-solid fa-code text-primary text-xl"></i>
                        <div class="flex flex-col leading-tight">
                            <span class="font-bold">{i18n.t("app.title")}</span>
                            <span class="text-xs text-base-content/70">{i18n.t("layout.adminSystem")}</span>
                        </div>
                    </Link<MainRoute>>
                    <ul class="menu flex-1 w-full">
                        { for sections }
                    </ul>
                    <div class="p-4 border-t border-base-300 flex items-center gap-3">
                        <div class="avatar placeholder">
                            <div class="bg-neutral text-neutral-content w-9 rounded-full">
                                <span>{initial}</span>
                            </div>
                        </div>
                        <div class="flex-1 min-w-0">
                            <div class="text-sm font-semibold truncate">{name}</div>
                            <div class="text-xs text-base-content/70 truncate">{email}</div>
                        </div>
                        <button
                            class="btn btn-ghost btn-sm btn-square"
                            onclick={logout}
                            aria-label={i18n.t("header.logout")}
                        >
                            <i class="fa-solid fa-right-from-bracket"></i>
                        </button>
                    </div>
                </aside>
            </div>
        </div>
    }
}
