//! Configuration status tree returned by `GET /account/{id}/config/status`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::serde_helpers::{lenient_vec, opt_string_lenient};

/// Status value that marks a component as healthy.
pub const STATUS_OK: &str = "ok";

/// A category or sub-component in an account's status tree.
///
/// Every field is optional on the wire and scalar fields of the wrong type
/// are read as their JSON text. Sub-components stay undecoded until a caller
/// asks for them with [`StatusComponent::parse`], so a healthy category with
/// malformed children is never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusComponent {
    #[serde(default, deserialize_with = "opt_string_lenient")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "opt_string_lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "opt_string_lenient")]
    pub message: Option<String>,
    #[serde(
        rename = "subComponents",
        default,
        deserialize_with = "lenient_vec",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sub_components: Vec<Value>,
}

impl StatusComponent {
    /// Read one element of a status tree.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem when `value` is not an object.
    pub fn parse(value: &Value) -> Result<Self, String> {
        if !value.is_object() {
            return Err(format!("expected an object, found {}", value));
        }
        serde_json::from_value(value.clone()).map_err(|e| e.to_string())
    }

    /// Status string, `"unknown"` when absent.
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }

    /// Message string, empty when absent.
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }

    pub fn is_ok(&self) -> bool {
        self.status() == STATUS_OK
    }
}
