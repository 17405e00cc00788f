//! User-related response models.

use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::constants::{FIELD_ID, FIELD_UPDATED};

/// A single user record
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserRecord {
    /// The identifier from the request path, unchanged
    #[schema(example = "42")]
    pub id: String,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
}

/// A user entry in the user list
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct UserSummary {
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "John Doe")]
    pub name: String,
}

/// Response for a profile update: the submitted fields, the target id and
/// an `updated` flag
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[schema(example = json!({"name": "X", "id": "42", "updated": true}))]
pub struct ProfileUpdateResponse {
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: Map<String, Value>,
    pub id: String,
    pub updated: bool,
}

impl ProfileUpdateResponse {
    /// Caller-supplied `id` and `updated` keys are replaced.
    pub fn new(mut fields: Map<String, Value>, id: String) -> Self {
        fields.remove(FIELD_ID);
        fields.remove(FIELD_UPDATED);
        Self {
            fields,
            id,
            updated: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_update_response_replaces_reserved_keys() {
        let fields = json!({"id": 5, "updated": false, "city": "NYC"})
            .as_object()
            .cloned()
            .unwrap();
        let value = serde_json::to_value(ProfileUpdateResponse::new(fields, "9".to_string()))
            .unwrap();
        assert_eq!(value, json!({"city": "NYC", "id": "9", "updated": true}));
    }

    #[test]
    fn test_nested_values_are_echoed() {
        let fields = json!({"address": {"zip": "10001"}, "tags": [1, 2]})
            .as_object()
            .cloned()
            .unwrap();
        let value = serde_json::to_value(ProfileUpdateResponse::new(fields, "1".to_string()))
            .unwrap();
        assert_eq!(value["address"]["zip"], "10001");
        assert_eq!(value["tags"], json!([1, 2]));
    }
}
