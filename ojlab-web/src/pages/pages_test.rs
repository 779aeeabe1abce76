//! Render tests for the landing call to action and the users error panel.

use std::rc::Rc;

use async_trait::async_trait;
use shared::models::{Session, User, UserRole};
use wasm_bindgen_test::*;
use yew::prelude::*;
use yewdux::{Context, Dispatch};

use super::LandingPage;
use super::users::{ErrorPanel, PanelError};
use crate::api::ApiError;
use crate::config::FrontendConfig;
use crate::session::{IdentitySource, PageNavigator, SessionStore};
use crate::test_harness::{render, store_with};

wasm_bindgen_test_configure!(run_in_browser);

/// Every `/user/me` call answers 401.
struct SignedOutBackend;

#[async_trait(?Send)]
impl IdentitySource for SignedOutBackend {
    async fn current_user(&self) -> Result<User, ApiError> {
        Err(ApiError::from_status(
            401,
            r#"{"message":"Authentication required"}"#,
        ))
    }
}

struct StayPut;

impl PageNavigator for StayPut {
    fn assign(&self, _url: &str) {}

    fn location(&self) -> Option<(String, String)> {
        None
    }

    fn replace_url(&self, _url: &str) {}
}

#[wasm_bindgen_test]
async fn landing_offers_login_after_unauthorized_fetch() {
    let store = Context::new();
    let session = SessionStore::new(
        Dispatch::new(&store),
        Rc::new(SignedOutBackend),
        Rc::new(StayPut),
        &FrontendConfig::new(),
        "https://oj.example.com",
    );
    let resolved = session.fetch_user().await;
    assert!(!resolved.loading);

    let rendered = render(store, html! { <LandingPage /> }).await;
    assert!(rendered.contains("Login with GitHub"));
    assert!(!rendered.contains("Open admin panel"));
}

#[wasm_bindgen_test]
async fn landing_links_admins_to_the_console() {
    let admin = User {
        id: 1,
        name: "Root".to_string(),
        role: UserRole::Admin,
        ..User::default()
    };
    let rendered = render(
        store_with(Session::resolved(Some(admin))),
        html! { <LandingPage /> },
    )
    .await;
    assert!(rendered.contains("Open admin panel"));
    assert!(rendered.contains("href=\"/admin\""));
    assert!(!rendered.contains("Login with GitHub"));
}

#[wasm_bindgen_test]
async fn self_delete_refusal_is_dismissable_without_reload() {
    let rendered = render(
        store_with(Session::signed_out()),
        html! { <ErrorPanel error={PanelError::SelfDelete} on_dismiss={Callback::noop()} /> },
    )
    .await;
    assert!(rendered.contains("You cannot delete your own account."));
    assert!(rendered.contains("Dismiss"));
    assert!(!rendered.contains("Reload"));
}

#[wasm_bindgen_test]
async fn failed_request_offers_reload() {
    let error = PanelError::Failed("request failed with status 500".to_string());
    let rendered = render(
        store_with(Session::signed_out()),
        html! { <ErrorPanel {error} on_dismiss={Callback::noop()} /> },
    )
    .await;
    assert!(rendered.contains("request failed with status 500"));
    assert!(rendered.contains("Reload"));
    assert!(rendered.contains("Dismiss"));
}
