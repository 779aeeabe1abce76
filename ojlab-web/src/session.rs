//! The session store: single source of truth for who is signed in.
//!
//! The store is built once at the application root and handed to the tree
//! through a Yew context. Its state lives in the yewdux [`AppState`] so every
//! screen re-renders when the identity changes.

use std::rc::Rc;

use async_trait::async_trait;
use shared::auth::is_login_return;
use shared::models::{Session, User};
use wasm_bindgen::JsValue;
use yewdux::Dispatch;

use crate::api::ApiError;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;

/// Where the current identity comes from.
#[async_trait(?Send)]
pub trait IdentitySource {
    /// Fetch the signed-in user, sending the session cookie.
    async fn current_user(&self) -> Result<User, ApiError>;
}

/// Browser location operations the session flow depends on.
pub trait PageNavigator {
    /// Full-page navigation to `url`, leaving the application.
    fn assign(&self, url: &str);
    /// Current path and query string (with its leading `?`, if any).
    fn location(&self) -> Option<(String, String)>;
    /// Swap the URL of the current history entry without navigating.
    fn replace_url(&self, url: &str);
}

/// [`PageNavigator`] backed by `window.location` and `window.history`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl PageNavigator for BrowserNavigator {
    fn assign(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().assign(url) {
            tracing::error!(?err, url, "page navigation failed");
        }
    }

    fn location(&self) -> Option<(String, String)> {
        let location = web_sys::window()?.location();
        Some((location.pathname().ok()?, location.search().ok()?))
    }

    fn replace_url(&self, url: &str) {
        let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
            return;
        };
        if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(url)) {
            tracing::warn!(?err, url, "could not rewrite the current URL");
        }
    }
}

/// Handle to the session state and the actions that change it.
#[derive(Clone)]
pub struct SessionStore {
    dispatch: Dispatch<AppState>,
    identity: Rc<dyn IdentitySource>,
    navigator: Rc<dyn PageNavigator>,
    login_url: String,
    logout_url: String,
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.identity, &other.identity)
            && Rc::ptr_eq(&self.navigator, &other.navigator)
            && self.login_url == other.login_url
            && self.logout_url == other.logout_url
    }
}

impl SessionStore {
    pub fn new(
        dispatch: Dispatch<AppState>,
        identity: Rc<dyn IdentitySource>,
        navigator: Rc<dyn PageNavigator>,
        config: &FrontendConfig,
        origin: &str,
    ) -> Self {
        Self {
            dispatch,
            identity,
            navigator,
            login_url: config.login_url(origin),
            logout_url: config.logout_url(origin),
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.dispatch.get().session.clone()
    }

    /// Ask the backend who is signed in and publish the answer.
    ///
    /// Any failure resolves to an anonymous session. Concurrent calls are
    /// not coordinated; whichever resolves last is what the store shows.
    pub async fn fetch_user(&self) -> Session {
        let user = match self.identity.current_user().await {
            Ok(user) => {
                tracing::info!(user_id = user.id, role = %user.role, "session resolved");
                Some(user)
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    unauthorized = err.is_unauthorized(),
                    "failed to fetch current user"
                );
                None
            }
        };
        let session = Session::resolved(user);
        let published = session.clone();
        self.dispatch.reduce_mut(move |state| state.session = published);
        session
    }

    /// Leave for the backend's GitHub login. The session is picked up again
    /// when the browser comes back.
    pub fn login(&self) {
        tracing::info!("redirecting to login");
        self.navigator.assign(&self.login_url);
    }

    /// Forget the user locally, then let the backend clear the cookie.
    pub fn logout(&self) {
        tracing::info!(user_id = ?self.session().user_id(), "signing out");
        self.dispatch.reduce_mut(|state| state.session.user = None);
        self.navigator.assign(&self.logout_url);
    }

    /// Drop the login marker from the address bar if the page was opened by
    /// the backend's post-login redirect.
    fn strip_login_marker(&self) -> bool {
        let Some((path, search)) = self.navigator.location() else {
            return false;
        };
        if !is_login_return(&path, &search) {
            return false;
        }
        tracing::debug!(path = %path, "completing login return");
        self.navigator.replace_url(&path);
        true
    }

    /// Finish a return from the login flow.
    ///
    /// The marker is stripped before this returns. The returned future
    /// fetches the identity again to pick up the new session cookie; `None`
    /// when the page was not opened by a login redirect.
    pub fn handle_login_return(&self) -> Option<impl Future<Output = Session> + use<>> {
        if !self.strip_login_marker() {
            return None;
        }
        let store = self.clone();
        Some(async move { store.fetch_user().await })
    }
}
