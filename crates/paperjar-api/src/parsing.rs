//! JSON parsing functions for PaperMC API responses.
//!
//! Sync functions that convert raw JSON responses into typed values. A
//! missing or malformed field is always a hard error, never coerced into
//! an empty-but-valid catalog.

use crate::error::{ApiError, ApiResult};
use serde_json::Value;

/// Extract the `versions` array from a project response.
///
/// Order is preserved exactly as returned; the API convention is newest
/// last, which is what the latest-pick relies on.
pub fn parse_versions(json: &Value) -> ApiResult<Vec<String>> {
    let items = json
        .get("versions")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::InvalidResponse {
            message: "missing 'versions' array in project response".to_string(),
        })?;

    coerce_identifiers(items, "versions")
}

/// Extract the `builds` array from a version response.
///
/// The upstream returns build numbers as JSON integers, so elements are
/// string-coerced rather than required to be strings.
pub fn parse_builds(json: &Value) -> ApiResult<Vec<String>> {
    let items = json
        .get("builds")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::InvalidResponse {
            message: "missing 'builds' array in version response".to_string(),
        })?;

    coerce_identifiers(items, "builds")
}

/// Convert every element of a catalog array to its string form.
fn coerce_identifiers(items: &[Value], field: &str) -> ApiResult<Vec<String>> {
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(ApiError::InvalidResponse {
                message: format!("unexpected element {other} in '{field}' array"),
            }),
        })
        .collect()
}
