//! Main entry point for the EvalDesk backend.
//!
//! This file initializes the Axum web server, sets up the database pool,
//! and registers all page routes and middleware.
//! It orchestrates the application's startup and defines its overall structure.

mod api;
mod auth;
mod config;
mod database;
mod errors;
mod middleware;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tokio::sync::RwLock;

use inertia::InertiaConfig;
use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::errors::AppError;

/// Shared server state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Session id to user id. Sessions live in process memory and do not
    /// survive a restart.
    pub sessions: Arc<RwLock<HashMap<String, i64>>>,
    pub inertia: InertiaConfig,
}

fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_redirect))
        .merge(auth::routes::auth_router())
        .merge(api::user::routes::user_router())
        .merge(api::evaluations::routes::evaluations_router())
        .merge(api::pages::routes::pages_router())
        .fallback(not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::attach_current_user,
        ))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .with_state(state)
}

async fn root_redirect() -> Redirect {
    Redirect::to("/dashboard")
}

async fn not_found() -> AppError {
    AppError::NotFound
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = AppConfig::load().context("failed to load configuration")?;
    let pool = database::connect(&config.database_url)
        .await
        .with_context(|| format!("failed to open database at {}", config.database_url))?;
    // Schema must be current before any route can touch it.
    database::MIGRATOR
        .run(&pool)
        .await
        .context("failed to apply database migrations")?;

    let state = AppState {
        pool,
        sessions: Arc::new(RwLock::new(HashMap::new())),
        inertia: InertiaConfig::new("EvalDesk", config.asset_version.clone()),
    };

    let app = build_router(state);
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app).await.context("server exited")?;
    Ok(())
}
