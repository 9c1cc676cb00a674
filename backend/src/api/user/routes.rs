//! Defines the HTTP routes for the signed-in user's pages.
//!
//! These routes map user-facing paths to handler functions and attach the
//! authentication guard so guests never reach them.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::auth::middleware::require_auth;
use crate::AppState;

pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::dashboard))
        .route_layer(middleware::from_fn(require_auth))
}
