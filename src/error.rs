// src/error.rs
use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde_json::{json, Map, Value};

use crate::validation::FieldError;

#[derive(Debug)]
pub enum AppError {
    DatabaseError(sqlx::Error),
    NotFound(String),
    ValidationError(Vec<FieldError>),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        AppError::ValidationError(errors)
    }

    pub fn db(err: sqlx::Error) -> Self {
        AppError::DatabaseError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::DatabaseError(e) => {
                tracing::error!(error = %e, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Database error occurred" }),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "message": msg })),
            AppError::ValidationError(errors) => {
                let fields: Map<String, Value> = errors
                    .into_iter()
                    .map(|e| (e.field, Value::String(e.message)))
                    .collect();
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "message": "Invalid request body", "errors": fields }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::db(err)
    }
}
