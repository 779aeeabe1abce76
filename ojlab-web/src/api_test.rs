//! Tests for the API client
//!
//! Covers endpoint construction against the configured API root and the
//! mapping of backend failures into `ApiError`.

#[cfg(test)]
mod tests {
    use crate::api::{ApiError, OjLabClient};
    use crate::config::FrontendConfig;

    fn client() -> OjLabClient {
        OjLabClient::from_config(&FrontendConfig::default(), "https://oj.example.com")
    }

    /// Tests endpoint URLs under the default API root
    #[test]
    fn test_endpoint_urls() {
        let client = client();
        assert_eq!(
            client.current_user_url(),
            "https://oj.example.com/api/v1/user/me"
        );
        assert_eq!(
            client.list_users_url(),
            "https://oj.example.com/api/v1/user/list"
        );
        assert_eq!(client.user_url(42), "https://oj.example.com/api/v1/user/42");
        assert_eq!(
            client.promote_url(42),
            "https://oj.example.com/api/v1/user/42/admin"
        );
    }

    /// Tests that a trailing slash on the base URL is not doubled
    #[test]
    fn test_base_url_trailing_slash() {
        let client = OjLabClient::new("http://localhost:8080/api/v1/");
        assert_eq!(
            client.api_url("/user/me"),
            "http://localhost:8080/api/v1/user/me"
        );
    }

    /// Tests that an absolute API base ignores the page origin
    #[test]
    fn test_absolute_api_base() {
        let config = FrontendConfig {
            api_base: "https://api.example.com/v1".to_string(),
            ..FrontendConfig::default()
        };
        let client = OjLabClient::from_config(&config, "https://oj.example.com");
        assert_eq!(client.current_user_url(), "https://api.example.com/v1/user/me");
    }

    /// Tests that the backend message is used when present
    #[test]
    fn test_status_error_uses_backend_message() {
        let err = ApiError::from_status(403, r#"{"message":"Permission denied"}"#);
        assert_eq!(err.status(), Some(403));
        assert!(!err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "request failed with status 403: Permission denied"
        );
    }

    /// Tests the fallback to the canonical reason phrase
    #[test]
    fn test_status_error_falls_back_to_reason() {
        let err = ApiError::from_status(401, "<html>nope</html>");
        assert!(err.is_unauthorized());
        assert_eq!(
            err.to_string(),
            "request failed with status 401: Unauthorized"
        );

        let err = ApiError::from_status(599, "");
        assert_eq!(err.to_string(), "request failed with status 599: request failed");
    }

    /// Tests that malformed JSON is reported as a decode error
    #[test]
    fn test_decode_error() {
        let err: ApiError = serde_json::from_str::<shared::models::User>("not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.status(), None);
    }
}
