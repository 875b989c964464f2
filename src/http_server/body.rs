//! Form body parsing
//!
//! Bodies are read as raw bytes so a missing `Content-Type` or an empty body
//! still reaches field validation. An empty body is an empty form.

use serde::de::DeserializeOwned;

use super::errors::{ApiError, ApiResult};

/// Parse a JSON form body, treating an empty body as all fields missing
pub fn parse_form<T: DeserializeOwned + Default>(body: &[u8]) -> ApiResult<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
}
