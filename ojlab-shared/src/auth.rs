//! Recognising the browser's return from the backend OAuth flow.
//!
//! The backend finishes the GitHub round-trip by redirecting to
//! [`CALLBACK_PATH`], optionally tagged with the [`LOGIN_MARKER`] query
//! parameter, after it has set the session cookie.

use url::form_urlencoded;

/// Path the backend redirects to after a successful login.
pub const CALLBACK_PATH: &str = "/auth/callback";

/// Query parameter marking a just-completed login.
pub const LOGIN_MARKER: &str = "auth_success";

/// Whether the location `path` + `search` is a return from the login flow.
///
/// `search` may be given with or without its leading `?`.
#[must_use]
pub fn is_login_return(path: &str, search: &str) -> bool {
    path == CALLBACK_PATH
        || form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
            .any(|(key, _)| key == LOGIN_MARKER)
}
