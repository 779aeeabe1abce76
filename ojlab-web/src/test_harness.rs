//! Providers for server-rendering screens in tests.
//!
//! Screens read the session through yewdux, text through i18nrs and links
//! through the router; [`Harness`] supplies all three around its children.

use i18nrs::yew::{I18nProvider, I18nProviderConfig};
use shared::models::Session;
use yew::prelude::*;
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};
use yewdux::{Context, Dispatch};

use crate::language::{self, DEFAULT_LANGUAGE};
use crate::models::app_state::AppState;

#[derive(Properties, PartialEq)]
pub struct HarnessProps {
    pub store: Context,
    pub children: Children,
}

#[function_component(Harness)]
pub fn harness(props: &HarnessProps) -> Html {
    let history = use_memo((), |()| AnyHistory::from(MemoryHistory::new()));
    let config = I18nProviderConfig {
        translations: language::translations(),
        default_language: DEFAULT_LANGUAGE.to_string(),
        ..Default::default()
    };

    html! {
        <ContextProvider<Context> context={props.store.clone()}>
            <I18nProvider ..config>
                <Router history={(*history).clone()}>
                    { props.children.clone() }
                </Router>
            </I18nProvider>
        </ContextProvider<Context>>
    }
}

/// A fresh store holding `session`.
pub fn store_with(session: Session) -> Context {
    let store = Context::new();
    Dispatch::<AppState>::new(&store).set(AppState { session });
    store
}

/// Render `content` inside a [`Harness`] backed by `store`.
pub async fn render(store: Context, content: Html) -> String {
    yew::LocalServerRenderer::<Harness>::with_props(HarnessProps {
        store,
        children: content,
    })
    .render()
    .await
}
