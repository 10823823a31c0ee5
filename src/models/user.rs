//! User record as returned by the users endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::NOT_AVAILABLE;

/// Postal address nested under a user. Only the city is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

/// One entry of the decoded users array.
///
/// Every field is optional at the source; the accessor methods substitute
/// `N/A` for anything missing so callers never branch on presence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_address", skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl UserRecord {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or(NOT_AVAILABLE)
    }

    /// `address.city`, or `N/A` when either level is absent.
    pub fn city(&self) -> &str {
        self.address
            .as_ref()
            .and_then(|a| a.city.as_deref())
            .unwrap_or(NOT_AVAILABLE)
    }
}

/// Accept any JSON scalar as text.
///
/// Strings pass through, numbers and booleans keep their JSON spelling, and
/// `null`, arrays and objects count as missing.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// An `address` that is not an object counts as missing.
fn lenient_address<'de, D>(deserializer: D) -> Result<Option<Address>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
