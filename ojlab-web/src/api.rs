use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::models::{ErrorResponse, PageRequest, User, UserId, UserList};
use thiserror::Error;

use crate::config::FrontendConfig;
use crate::directory::UserDirectory;
use crate::session::IdentitySource;

/// Failure of a backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of the failure, if the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Build the error for a non-2xx `status`, using the backend's message
    /// when `body` carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = ErrorResponse::parse(body).map_or_else(
            || {
                reqwest::StatusCode::from_u16(status)
                    .ok()
                    .and_then(|code| code.canonical_reason())
                    .unwrap_or("request failed")
                    .to_string()
            },
            |error| error.message,
        );
        Self::Status { status, message }
    }
}

/// Client for the OJ Lab backend.
///
/// Authentication rides on the browser's session cookie; the client holds no
/// token of its own.
#[derive(Clone, Debug)]
pub struct OjLabClient {
    base_url: String,
    client: Client,
}

impl OjLabClient {
    /// Client for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Client for the configured API under the page `origin`.
    pub fn from_config(config: &FrontendConfig, origin: &str) -> Self {
        Self::new(&config.api_root(origin))
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub(crate) fn current_user_url(&self) -> String {
        self.api_url("user/me")
    }

    pub(crate) fn list_users_url(&self) -> String {
        self.api_url("user/list")
    }

    pub(crate) fn user_url(&self, id: UserId) -> String {
        self.api_url(&format!("user/{id}"))
    }

    pub(crate) fn promote_url(&self, id: UserId) -> String {
        self.api_url(&format!("user/{id}/admin"))
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = with_credentials(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let body = Self::send(request).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Retrieve the signed-in user.
    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        tracing::debug!("fetching current user");
        Self::send_json(self.client.get(self.current_user_url())).await
    }

    /// Retrieve one page of the user directory.
    pub async fn list_users(&self, page: PageRequest) -> Result<UserList, ApiError> {
        tracing::debug!(page = page.page, page_size = page.page_size, "listing users");
        let request = self.client.get(self.list_users_url()).query(&[
            ("page", page.page),
            ("page_size", page.page_size),
        ]);
        Self::send_json(request).await
    }

    /// Delete a user account.
    pub async fn delete_user(&self, id: UserId) -> Result<(), ApiError> {
        tracing::info!(user_id = id, "deleting user");
        Self::send(self.client.delete(self.user_url(id))).await?;
        Ok(())
    }

    /// Grant the admin role to a user.
    pub async fn promote_user(&self, id: UserId) -> Result<(), ApiError> {
        tracing::info!(user_id = id, "promoting user to admin");
        Self::send(self.client.put(self.promote_url(id))).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl IdentitySource for OjLabClient {
    async fn current_user(&self) -> Result<User, ApiError> {
        self.get_current_user().await
    }
}

#[async_trait(?Send)]
impl UserDirectory for OjLabClient {
    async fn list(&self, page: PageRequest) -> Result<UserList, ApiError> {
        self.list_users(page).await
    }

    async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        self.delete_user(id).await
    }

    async fn promote(&self, id: UserId) -> Result<(), ApiError> {
        self.promote_user(id).await
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}
