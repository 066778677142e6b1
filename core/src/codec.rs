//! JSON encoding of request bodies and decoding of response bodies.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

pub fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Strip one leading and one trailing `"` from an identifier bound for a URL
/// path segment.
///
/// Some upstream endpoints hand back ids still wrapped in their JSON quotes.
/// This is a workaround for that encoding bug, not an unescape: inner
/// characters are never touched. Only update and delete paths use it.
pub fn trim_quotes(id: &str) -> &str {
    let id = id.strip_prefix('"').unwrap_or(id);
    id.strip_suffix('"').unwrap_or(id)
}
