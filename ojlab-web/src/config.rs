//! Frontend configuration module
//!
//! Endpoint paths are fixed at build time through `OJLAB_*` environment
//! variables and resolved against the page origin at runtime.

const DEFAULT_API_BASE: &str = "/api/v1";
const DEFAULT_LOGIN_PATH: &str = "/auth/login?provider=github";
const DEFAULT_LOGOUT_PATH: &str = "/auth/logout";
const DEFAULT_REPOSITORY_URL: &str = "https://github.com/oj-lab/reborn";
const FALLBACK_ORIGIN: &str = "http://localhost:8080";

/// Frontend configuration for backend endpoints and external links
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Prefix of the JSON API, relative to the origin.
    pub api_base: String,
    /// Full-page entry point of the GitHub OAuth flow.
    pub login_path: String,
    /// Full-page endpoint that clears the session cookie.
    pub logout_path: String,
    /// Project repository, linked from the landing page.
    pub repository_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("OJLAB_API_BASE")
                .unwrap_or(DEFAULT_API_BASE)
                .to_string(),
            login_path: option_env!("OJLAB_LOGIN_PATH")
                .unwrap_or(DEFAULT_LOGIN_PATH)
                .to_string(),
            logout_path: option_env!("OJLAB_LOGOUT_PATH")
                .unwrap_or(DEFAULT_LOGOUT_PATH)
                .to_string(),
            repository_url: option_env!("OJLAB_REPOSITORY_URL")
                .unwrap_or(DEFAULT_REPOSITORY_URL)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Absolute API root for `origin`, without a trailing slash.
    pub fn api_root(&self, origin: &str) -> String {
        join_url(origin, &self.api_base)
    }

    /// Absolute login URL for `origin`.
    pub fn login_url(&self, origin: &str) -> String {
        join_url(origin, &self.login_path)
    }

    /// Absolute logout URL for `origin`.
    pub fn logout_url(&self, origin: &str) -> String {
        join_url(origin, &self.logout_path)
    }
}

/// Origin of the current page, e.g. `https://oj.example.com`.
pub fn page_origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}

fn join_url(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.trim_end_matches('/').to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/').trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_backend_routes() {
        let config = FrontendConfig::default();
        assert_eq!(config.api_base, "/api/v1");
        assert_eq!(config.login_path, "/auth/login?provider=github");
        assert_eq!(config.logout_path, "/auth/logout");
        assert!(config.repository_url.starts_with("https://"));
    }

    #[test]
    fn resolves_against_origin() {
        let config = FrontendConfig::new();
        assert_eq!(
            config.api_root("https://oj.example.com/"),
            "https://oj.example.com/api/v1"
        );
        assert_eq!(
            config.login_url("https://oj.example.com"),
            "https://oj.example.com/auth/login?provider=github"
        );
        assert_eq!(
            config.logout_url("http://localhost:8080"),
            "http://localhost:8080/auth/logout"
        );
    }

    #[test]
    fn absolute_paths_are_kept() {
        let config = FrontendConfig {
            api_base: "https://api.example.com/v1/".to_string(),
            ..FrontendConfig::default()
        };
        assert_eq!(
            config.api_root("http://localhost:8080"),
            "https://api.example.com/v1"
        );
    }
}
