//! Defines the HTTP routes for the static informational pages.

use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn pages_router() -> Router<AppState> {
    Router::new()
        .route("/about", get(handlers::about))
        .route("/contact", get(handlers::contact))
        .route("/privacy", get(handlers::privacy))
}
