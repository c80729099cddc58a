//! Request body helpers shared by the JSON handlers.

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::ApiError;

/// Unwrap a JSON body, rendering any rejection as 422.
pub fn parse_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|e| ApiError::unprocessable(format!("Invalid JSON payload: {}", e.body_text())))
}

/// Absent, `null` and empty prompts are all rejected with 400.
pub fn require_prompt(prompt: Option<String>) -> Result<String, ApiError> {
    require_text(prompt, "Prompt required")
}

pub fn require_text(value: Option<String>, message: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::bad_request(message))
}
