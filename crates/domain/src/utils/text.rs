//! Text rendering for values crossing the proxy boundary.
//!
//! Everything the interceptor writes into the event log goes through
//! [`describe`], which never fails: values serde cannot encode are replaced
//! by [`UNSERIALIZABLE_PLACEHOLDER`].

use serde::Serialize;

use crate::constants::UNSERIALIZABLE_PLACEHOLDER;

/// Render any serializable value as compact JSON.
///
/// Bare JSON strings are emitted without their surrounding quotes so that
/// error messages and plain text payloads stay readable.
pub fn describe<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(text)) => text,
        Ok(other) => other.to_string(),
        Err(_) => UNSERIALIZABLE_PLACEHOLDER.to_string(),
    }
}

/// Convert a value to JSON, substituting the placeholder string on failure.
pub fn to_value_lossy<T: Serialize + ?Sized>(value: &T) -> serde_json::Value {
    serde_json::to_value(value)
        .unwrap_or_else(|_| serde_json::Value::String(UNSERIALIZABLE_PLACEHOLDER.to_string()))
}
