//! Authentication response models.

use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::constants::FIELD_ID;

/// User summary embedded in a login response
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LoginUser {
    #[schema(example = 1)]
    pub id: u32,
    /// Echo of the submitted email, `null` when none was sent
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
}

/// Response for a login
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "mock-jwt-token")]
    pub token: String,
    pub user: LoginUser,
}

/// Response for a signup: the submitted fields plus the assigned id
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({"email": "new@example.com", "name": "New User", "id": 2}))]
pub struct SignupResponse {
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: BTreeMap<String, String>,
    pub id: u32,
}

impl SignupResponse {
    /// Any caller-supplied `id` is dropped in favour of `id`.
    pub fn new(mut fields: BTreeMap<String, String>, id: u32) -> Self {
        fields.remove(FIELD_ID);
        Self { fields, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_response_shape_with_null_email() {
        let resp = LoginResponse {
            token: "t".to_string(),
            user: LoginUser { id: 1, email: None },
        };
        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({"token": "t", "user": {"id": 1, "email": null}})
        );
    }

    #[test]
    fn test_signup_response_overrides_id() {
        let fields = BTreeMap::from([
            ("id".to_string(), "99".to_string()),
            ("name".to_string(), "Ann".to_string()),
        ]);
        let value = serde_json::to_value(SignupResponse::new(fields, 2)).unwrap();
        assert_eq!(value, json!({"name": "Ann", "id": 2}));
    }
}
