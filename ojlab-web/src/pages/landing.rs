use crate::{
    config::FrontendConfig, models::app_state::AppState, routes::MainRoute,
    session::SessionStore,
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Feature cards: icon and translation key prefix.
const FEATURES: [(IconId, &str); 3] = [
    (IconId::HeroiconsOutlineCodeBracket, "landing.features.languages"),
    (IconId::HeroiconsOutlineBolt, "landing.features.judging"),
    (IconId::HeroiconsOutlineChartBar, "landing.features.analytics"),
];

/// Public landing page
#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    let (i18n, ..) = use_translation();
    let store = use_context::<SessionStore>();
    let session = use_selector(|state: &AppState| state.session.clone());
    let repository_url = FrontendConfig::new().repository_url;

    let call_to_action = if session.is_admin() {
        html! {
            <Link<MainRoute> to={MainRoute::AdminRoot} classes="btn btn-primary btn-lg">
                <Icon icon_id={IconId::HeroiconsOutlineSquares2X2} class="w-5 h-5" />
                {i18n.t("landing.openAdmin")}
            </Link<MainRoute>>
        }
    } else if session.is_authenticated() {
        html! {}
    } else {
        let login = Callback::from(move |_: yew::MouseEvent| {
            if let Some(store) = &store {
                store.login();
            }
        });
        html! {
            <button class="btn btn-primary btn-lg gap-2" onclick={login} disabled={session.loading}>
                <i class="fa-brands fa-github"></i>
                {i18n.t("landing.login")}
            </button>
        }
    };

    html! {
        <div>
            <section class="hero min-h-[60vh] bg-base-200">
                <div class="hero-content text-center">
                    <div class="max-w-2xl space-y-6">
                        <h1 class="text-5xl font-bold">{i18n.t("landing.title")}</h1>
                        <p class="text-lg text-base-content/80">{i18n.t("landing.subtitle")}</p>
                        <div class="flex justify-center gap-3">
                            {call_to_action}
                            <a href={repository_url} target="_blank" rel="noopener" class="btn btn-outline btn-lg">
                                {i18n.t("landing.source")}
                            </a>
                        </div>
                    </div>
                </div>
            </section>

            <section class="container mx-auto px-4 py-16">
                <h2 class="text-3xl font-bold text-center mb-10">{i18n.t("landing.features.title")}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    { for FEATURES.iter().map(|(icon, key)| html! {
                        <div class="card bg-base-100 border border-base-300 shadow-sm">
                            <div class="card-body items-center text-center">
                                <Icon icon_id={*icon} class="w-10 h-10 text-primary" />
                                <h3 class="card-title">{i18n.t(&format!("{key}.title"))}</h3>
                                <p class="text-base-content/70">{i18n.t(&format!("{key}.description"))}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
