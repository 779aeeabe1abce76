use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::{ContextProvider, Html, function_component, html, use_memo};
use yew_hooks::use_mount;
use yew_router::prelude::*;
use yewdux::prelude::use_dispatch;

use crate::api::OjLabClient;
use crate::config::{FrontendConfig, page_origin};
use crate::directory::DirectoryHandle;
use crate::models::app_state::AppState;
use crate::routes::{self, MainRoute};
use crate::session::{BrowserNavigator, SessionStore};

/// Root component: owns the backend client and the session store, resolves
/// the identity once on start.
#[function_component(App)]
pub fn app() -> Html {
    let dispatch = use_dispatch::<AppState>();
    let services = use_memo((), move |()| {
        let config = FrontendConfig::new();
        let origin = page_origin();
        let client = Rc::new(OjLabClient::from_config(&config, &origin));
        let store = SessionStore::new(
            dispatch,
            client.clone(),
            Rc::new(BrowserNavigator),
            &config,
            &origin,
        );

        // The login marker has to go before the router sees the location.
        if let Some(refetch) = store.handle_login_return() {
            tracing::info!("returned from login");
            spawn_local(async move {
                refetch.await;
            });
        }

        (store, DirectoryHandle::new(client))
    });
    let (store, directory) = (*services).clone();

    {
        let store = store.clone();
        use_mount(move || {
            spawn_local(async move {
                store.fetch_user().await;
            });
        });
    }

    html! {
        <ContextProvider<SessionStore> context={store}>
            <ContextProvider<DirectoryHandle> context={directory}>
                <BrowserRouter>
                    <Switch<MainRoute> render={routes::switch} />
                </BrowserRouter>
            </ContextProvider<DirectoryHandle>>
        </ContextProvider<SessionStore>>
    }
}
