mod api;
mod app;
mod components;
mod config;
mod containers;
mod directory;
mod language;
mod logging;
mod models;
mod pages;
mod routes;
mod session;
mod theme;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_harness;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::DEFAULT_LANGUAGE;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let config = I18nProviderConfig {
        translations: language::translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <YewduxRoot>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </YewduxRoot>
    }
}

fn main() {
    logging::init();
    theme::restore_color_theme();

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        tracing::error!("no document body to mount the console on");
        return;
    };

    tracing::info!("starting OJ Lab console");
    Renderer::<InternationalApp>::with_root(body.into()).render();
}
