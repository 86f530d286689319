use crate::transport::http::errors::ApiError;
use crate::transport::http::validation::{self, numeric, Rule};
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use serde_json::json;

/// Rule chain for `:id` path segments on lookups.
pub const ID_RULES: &[Rule] = &[Rule::new("id", numeric, "id must be a number")];

/// Runs [`ID_RULES`] against a raw path segment and parses it.
///
/// `Ok(None)` means the segment looks numeric but names no possible record
/// (negative or fractional), which callers treat as an unknown id.
pub fn validated_id(raw: &str) -> Result<Option<u64>, ApiError> {
    validation::run_rules(ID_RULES, &json!({ "id": raw })).map_err(ApiError::ValidationFailed)?;
    Ok(parse_id(raw))
}

/// Raw `:id` segment, or `None` when it does not percent-decode to UTF-8.
pub fn id_segment(path: Result<Path<String>, PathRejection>) -> Option<String> {
    match path {
        Ok(Path(raw)) => Some(raw),
        Err(e) => {
            tracing::debug!(error = %e, "undecodable id segment");
            None
        }
    }
}

pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

/// Treats an empty query value as absent.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
