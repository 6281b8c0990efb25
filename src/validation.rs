// src/validation.rs
//! Explicit request schemas.
//!
//! Every JSON body is checked against a list of [`FieldRule`]s before it is
//! turned into a typed request. All violations are collected, so a client
//! learns about every bad field in one round trip.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Pseudo-field used when the body as a whole is unusable.
pub const BODY_FIELD: &str = "body";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    NonEmptyText,
    Number,
    Integer,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldRule {
    pub const fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: true }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub const fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind, required: false }
    }

    fn check(&self, value: Option<&Value>) -> Option<FieldError> {
        // null counts as absent
        let value = match value {
            None | Some(Value::Null) => {
                return self.required.then(|| self.error("is required"));
            }
            Some(v) => v,
        };

        let problem = match (self.kind, value) {
            (FieldKind::Text, Value::String(_)) => None,
            (FieldKind::NonEmptyText, Value::String(s)) if s.trim().is_empty() => {
                Some("must not be empty")
            }
            (FieldKind::NonEmptyText, Value::String(_)) => None,
            (FieldKind::Text | FieldKind::NonEmptyText, _) => Some("must be a string"),
            (FieldKind::Number, Value::Number(_)) => None,
            (FieldKind::Number, _) => Some("must be a number"),
            (FieldKind::Integer, Value::Number(n)) if n.is_i64() => None,
            (FieldKind::Integer, _) => Some("must be an integer"),
        };

        problem.map(|p| self.error(p))
    }

    fn error(&self, problem: &str) -> FieldError {
        FieldError::new(self.name, format!("{} {}", self.label, problem))
    }
}

/// Implemented by request DTOs that carry a field schema.
pub trait RequestSchema {
    const FIELDS: &'static [FieldRule];
}

/// Checks `body` against `rules`, returning every violation found.
pub fn check(body: &Value, rules: &[FieldRule]) -> Result<(), Vec<FieldError>> {
    let Some(object) = body.as_object() else {
        return Err(vec![FieldError::new(
            BODY_FIELD,
            "Request body must be a JSON object",
        )]);
    };

    let errors: Vec<FieldError> = rules
        .iter()
        .filter_map(|rule| rule.check(object.get(rule.name)))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
    // An empty body means no fields were sent at all.
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(bytes).map_err(|_| {
        AppError::validation(vec![FieldError::new(
            BODY_FIELD,
            "Request body must be valid JSON",
        )])
    })
}

/// JSON body extractor that enforces `T::FIELDS` before deserializing.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestSchema + DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(vec![FieldError::new(BODY_FIELD, e.body_text())]))?;

        let value = parse_body(&bytes)?;
        check(&value, T::FIELDS).map_err(AppError::validation)?;

        serde_json::from_value(value)
            .map(ValidatedJson)
            .map_err(|e| AppError::validation(vec![FieldError::new(BODY_FIELD, e.to_string())]))
    }
}
