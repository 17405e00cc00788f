//! Authentication request models.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::constants::{FIELD_EMAIL, FIELD_PASSWORD};

/// Login payload: any JSON object of scalar values, read as strings.
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
#[schema(example = json!({"email": "user@example.com", "password": "secret"}))]
pub struct Credentials(pub BTreeMap<String, String>);

impl Credentials {
    pub fn email(&self) -> Option<&str> {
        self.0.get(FIELD_EMAIL).map(String::as_str)
    }

    pub fn password(&self) -> Option<&str> {
        self.0.get(FIELD_PASSWORD).map(String::as_str)
    }
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_scalar_map(deserializer).map(Self)
    }
}

/// Signup payload: any JSON object of scalar values, read as strings.
#[derive(Debug, Clone, Default, PartialEq, ToSchema)]
#[schema(example = json!({"email": "new@example.com", "name": "New User"}))]
pub struct SignupRequest(pub BTreeMap<String, String>);

impl SignupRequest {
    pub fn email(&self) -> Option<&str> {
        self.0.get(FIELD_EMAIL).map(String::as_str)
    }

    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<'de> Deserialize<'de> for SignupRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_scalar_map(deserializer).map(Self)
    }
}

/// Read a JSON object whose values are strings, numbers, booleans or null.
///
/// Numbers and booleans keep their JSON text (`30` becomes `"30"`), null
/// entries are dropped, nested arrays and objects are rejected.
fn deserialize_scalar_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, String>, D::Error> {
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    let mut fields = BTreeMap::new();

    for (key, value) in raw {
        let text = match value {
            Value::Null => continue,
            Value::String(text) => text,
            Value::Number(number) => number.to_string(),
            Value::Bool(flag) => flag.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(D::Error::custom(format!(
                    "field `{}` must be a string, number or boolean",
                    key
                )));
            }
        };
        fields.insert(key, text);
    }

    Ok(fields)
}
