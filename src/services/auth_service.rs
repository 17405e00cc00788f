//! Authentication service for login and signup against mock data.

use log::debug;

use crate::constants::{LOGIN_USER_ID, MOCK_TOKEN, SIGNUP_USER_ID};
use crate::models::{Credentials, LoginResponse, LoginUser, SignupRequest, SignupResponse};
use crate::utils::log_sanitizer::mask_email;

/// Service for authentication operations.
///
/// Nothing is stored and no credential is ever checked.
#[derive(Debug, Clone, Default)]
pub struct AuthService;

impl AuthService {
    /// Create a new AuthService instance.
    pub fn new() -> Self {
        Self
    }

    /// Log a user in, returning the mock token and the echoed email.
    pub fn login(&self, credentials: &Credentials) -> LoginResponse {
        let user = self.validate_user(credentials.email(), credentials.password());

        LoginResponse {
            token: MOCK_TOKEN.to_string(),
            user,
        }
    }

    /// Register a user: the submitted fields come back with the assigned id.
    pub fn signup(&self, user_data: SignupRequest) -> SignupResponse {
        SignupResponse::new(user_data.into_fields(), SIGNUP_USER_ID)
    }

    /// Accepts every email/password pair as the login user.
    pub fn validate_user(&self, email: Option<&str>, _password: Option<&str>) -> LoginUser {
        debug!(
            "Accepting credentials for {}",
            email.map(mask_email).unwrap_or_else(|| "<no email>".to_string())
        );

        LoginUser {
            id: LOGIN_USER_ID,
            email: email.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn credentials(pairs: &[(&str, &str)]) -> Credentials {
        Credentials(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_login_returns_mock_token_and_email() {
        let resp = AuthService::new().login(&credentials(&[
            ("email", "user@example.com"),
            ("password", "wrong-on-purpose"),
        ]));

        assert_eq!(resp.token, "mock-jwt-token");
        assert_eq!(resp.user.id, 1);
        assert_eq!(resp.user.email.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn test_login_without_email() {
        let resp = AuthService::new().login(&Credentials::default());

        assert_eq!(resp.token, "mock-jwt-token");
        assert_eq!(resp.user.email, None);
    }

    #[test]
    fn test_signup_assigns_id_two() {
        let data = SignupRequest(BTreeMap::from([
            ("email".to_string(), "new@example.com".to_string()),
            ("id".to_string(), "77".to_string()),
        ]));

        let resp = AuthService::new().signup(data);

        assert_eq!(resp.id, 2);
        assert_eq!(
            resp.fields.get("email").map(String::as_str),
            Some("new@example.com")
        );
        assert!(!resp.fields.contains_key("id"));
    }

    #[test]
    fn test_validate_user_accepts_anything() {
        let user = AuthService::new().validate_user(Some("x@y.z"), None);
        assert_eq!(
            user,
            LoginUser {
                id: 1,
                email: Some("x@y.z".to_string())
            }
        );
    }
}
