//! Global application error types and handlers.
//!
//! This module defines custom error types that are used across the entire
//! backend application and provides mechanisms for consistent error handling
//! and response formatting.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

/// Per-field messages in the shape forms consume: field name to the list of
/// everything wrong with it.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Errors that can cross a handler boundary. Every route funnels through the
/// `IntoResponse` mapping below so responses stay consistent across the app.
#[derive(Debug, Error)]
pub enum AppError {
    /// Expected user-input failures; surfaced to the form, never logged as
    /// server errors.
    #[error("validation failed")]
    Validation(FieldErrors),

    #[error("authentication required")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Single-field validation failure, for checks that live outside the
    /// declarative validators.
    pub fn field(name: &str, message: &str) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(name.to_string(), vec![message.to_string()]);
        AppError::Validation(errors)
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(flatten(errors))
    }
}

/// OS entropy failures abort the request; a session id must never be built
/// from a partially filled buffer.
impl From<getrandom::Error> for AppError {
    fn from(err: getrandom::Error) -> Self {
        AppError::Internal(format!("entropy source failed: {err}"))
    }
}

/// Collapse the validator's nested report into field -> messages, keeping
/// every violation; the declarative validators do not short-circuit and
/// neither does this.
fn flatten(errors: ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, violations) in errors.field_errors() {
        let messages = violations
            .iter()
            .map(|violation| {
                violation
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("invalid value for {field}"))
            })
            .collect();
        out.insert(wire_name(field), messages);
    }
    out
}

/// Wire field names are camelCase; the validator reports Rust field names.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Validation(errors) => json!({ "errors": errors }),
            AppError::Unauthorized => json!({ "status": "unauthorized" }),
            AppError::NotFound => json!({ "status": "not_found" }),
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                json!({ "status": "error", "message": "internal server error" })
            }
        };
        (status, Json(body)).into_response()
    }
}
