//! Defines the HTTP routes specifically for authentication.
//!
//! These routes handle endpoints like user login, registration, and logout.
//! They are designed to be integrated into the main Axum router.

use axum::routing::{get, post};
use axum::Router;

use super::handlers;
use crate::AppState;

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", get(handlers::show_login).post(handlers::login))
        .route(
            "/register",
            get(handlers::show_register).post(handlers::register),
        )
        .route("/logout", post(handlers::logout))
}
