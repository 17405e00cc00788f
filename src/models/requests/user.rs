//! User-related request models.

use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::constants::{DEFAULT_PROFILE_USER_ID, FIELD_USER_ID};

/// Profile update payload: any JSON object, optionally carrying `userId`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
#[schema(value_type = Object, example = json!({"userId": "7", "city": "NYC"}))]
pub struct ProfileUpdate(pub Map<String, Value>);

impl ProfileUpdate {
    /// The user the update targets, taken from the body's `userId`.
    ///
    /// String ids are used verbatim and numeric ids in their decimal form.
    /// A missing, null or otherwise-typed `userId` falls back to `"1"`.
    /// The field is read, not removed.
    pub fn user_id(&self) -> String {
        match self.0.get(FIELD_USER_ID) {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => DEFAULT_PROFILE_USER_ID.to_string(),
        }
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}
