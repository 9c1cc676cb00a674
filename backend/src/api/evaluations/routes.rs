//! Defines the HTTP routes for the evaluation worklist.
//!
//! These routes map evaluation paths to handler functions and attach the
//! authentication guard so guests never reach them.

use axum::middleware;
use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::auth::middleware::require_auth;
use crate::AppState;

pub fn evaluations_router() -> Router<AppState> {
    Router::new()
        .route("/evaluations", get(handlers::index))
        .route_layer(middleware::from_fn(require_auth))
}
