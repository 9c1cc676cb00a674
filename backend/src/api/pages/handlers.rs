//! Handler functions for the static informational pages.
//!
//! Each page renders its component with empty props; the pages are public
//! and identical for guests and members.

use axum::extract::State;
use axum::response::Response;
use serde_json::json;

use inertia::Inertia;

use crate::AppState;

/// GET /about.
pub async fn about(State(state): State<AppState>, inertia: Inertia) -> Response {
    inertia.render(&state.inertia, "pages/about", json!({}))
}

/// GET /contact.
pub async fn contact(State(state): State<AppState>, inertia: Inertia) -> Response {
    inertia.render(&state.inertia, "pages/contact", json!({}))
}

/// GET /privacy.
pub async fn privacy(State(state): State<AppState>, inertia: Inertia) -> Response {
    inertia.render(&state.inertia, "pages/privacy", json!({}))
}
