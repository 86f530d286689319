//! Declarative field rules and the interpreter that runs them.
//!
//! A rule chain is a static table of `(field, predicate, message)` entries bound to one
//! endpoint. Every rule is evaluated, even after earlier failures, and each failing rule
//! contributes exactly one `FieldError`, in declaration order.

use crate::transport::http::errors::ApiError;
use crate::transport::http::types::FieldError;
use async_trait::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde_json::Value as JsonValue;

/// A field predicate. Receives `None` when the field is absent.
pub type Predicate = fn(Option<&JsonValue>) -> bool;

#[derive(Clone, Copy)]
pub struct Rule {
    pub field: &'static str,
    pub check: Predicate,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(field: &'static str, check: Predicate, message: &'static str) -> Self {
        Self {
            field,
            check,
            message,
        }
    }
}

/// Runs every rule against `input` (a JSON object keyed by field name).
pub fn run_rules(rules: &[Rule], input: &JsonValue) -> Result<(), Vec<FieldError>> {
    let errors: Vec<FieldError> = rules
        .iter()
        .filter(|rule| !(rule.check)(input.get(rule.field)))
        .map(|rule| FieldError::new(rule.field, rule.message))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Text form of a scalar: strings as-is, numbers and booleans stringified.
pub fn text_of(value: Option<&JsonValue>) -> Option<String> {
    match value? {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Numeric value of a number or of a string that looks numeric.
pub fn number_of(value: Option<&JsonValue>) -> Option<f64> {
    let number = match value? {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) if is_numeric_text(s) => s.parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// `[+-]?digits` with an optional fractional part, e.g. `12`, `-3.5`, `.5`.
fn is_numeric_text(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (s, None),
    };
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    match frac_part {
        Some(f) => !f.is_empty() && all_digits(f) && all_digits(int_part),
        None => !int_part.is_empty() && all_digits(int_part),
    }
}

pub fn not_blank(value: Option<&JsonValue>) -> bool {
    text_of(value).is_some_and(|s| !s.trim().is_empty())
}

/// At least `N` characters after trimming.
pub fn min_chars<const N: usize>(value: Option<&JsonValue>) -> bool {
    text_of(value).is_some_and(|s| s.trim().chars().count() >= N)
}

pub fn numeric(value: Option<&JsonValue>) -> bool {
    match value {
        Some(JsonValue::Number(_)) => true,
        Some(JsonValue::String(s)) => is_numeric_text(s),
        _ => false,
    }
}

pub fn positive(value: Option<&JsonValue>) -> bool {
    number_of(value).is_some_and(|n| n > 0.0)
}

pub fn email_like(value: Option<&JsonValue>) -> bool {
    let Some(text) = text_of(value) else {
        return false;
    };
    match text.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// A request body type guarded by a rule chain.
pub trait ValidatedBody: Sized {
    /// Rules run against the raw body, after aliases are resolved.
    const RULES: &'static [Rule];

    /// `(alias, field)` pairs; an alias is copied to its field when the field is absent.
    const ALIASES: &'static [(&'static str, &'static str)] = &[];

    /// Converts a body that passed every rule.
    fn from_valid(body: &JsonValue) -> Result<Self, ApiError>;
}

/// Extractor that parses a JSON body and runs `T`'s rule chain before the handler.
///
/// A failing chain short-circuits with a 400 "validation failed" envelope listing every
/// failing rule; a body that is not JSON at all is an unhandled failure.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: ValidatedBody + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(mut body) = Json::<JsonValue>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Unhandled(e.body_text()))?;

        resolve_aliases(&mut body, T::ALIASES);
        run_rules(T::RULES, &body).map_err(ApiError::ValidationFailed)?;
        T::from_valid(&body).map(ValidatedJson)
    }
}

fn resolve_aliases(body: &mut JsonValue, aliases: &[(&str, &str)]) {
    let Some(object) = body.as_object_mut() else {
        return;
    };
    for (alias, field) in aliases {
        if object.contains_key(*field) {
            continue;
        }
        if let Some(value) = object.get(*alias).cloned() {
            object.insert((*field).to_string(), value);
        }
    }
}

/// Trimmed text of a field that already passed its rules.
pub fn required_text(body: &JsonValue, field: &str) -> Result<String, ApiError> {
    text_of(body.get(field))
        .map(|s| s.trim().to_string())
        .ok_or_else(|| ApiError::Unhandled(format!("field {field} is missing")))
}

/// Trimmed text of an optional field; absent or non-scalar becomes empty.
pub fn optional_text(body: &JsonValue, field: &str) -> String {
    text_of(body.get(field))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

pub fn required_number(body: &JsonValue, field: &str) -> Result<f64, ApiError> {
    number_of(body.get(field))
        .ok_or_else(|| ApiError::Unhandled(format!("field {field} is not a number")))
}
