//! Serde helpers for loosely typed API payloads.
//!
//! Responsibilities:
//! - Accept text fields that arrive as strings, numbers, or other scalars.
//! - Accept list fields that are sometimes absent, null, or not a list at all.
//!
//! Invariants / assumptions:
//! - Elements inside a list that *is* present must still deserialize cleanly;
//!   only the outer shape is relaxed.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

/// Read any JSON value as an optional string.
///
/// Strings pass through, `null` is `None`, and every other value (numbers,
/// booleans, arrays, objects) becomes its JSON text.
pub fn opt_string_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Deserialize a `Vec<T>` when the value is an array, and an empty vec for
/// anything else.
pub fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match serde_json::Value::deserialize(deserializer)? {
        value @ serde_json::Value::Array(_) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => Ok(Vec::new()),
    }
}
