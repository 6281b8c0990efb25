// src/dtos/common.rs
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IdData {
    pub id: i64,
}

/// `{"message": ...}` with an optional `data.id` for writes that produce a row.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<IdData>,
}

impl MessageResponse {
    pub fn new(message: &'static str) -> Self {
        Self { message, data: None }
    }

    pub fn with_id(message: &'static str, id: i64) -> Self {
        Self {
            message,
            data: Some(IdData { id }),
        }
    }
}
