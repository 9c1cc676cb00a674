//! Custom error types specific to the `inertia` crate.
//!
//! This module defines errors that can occur while assembling or rendering a
//! page object, and maps them onto an opaque HTTP 500 so protocol internals
//! never leak to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InertiaError {
    #[error("failed to serialize page object: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("redirect target is not a valid header value: {0}")]
    BadLocation(String),
}

impl IntoResponse for InertiaError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "page render failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}
