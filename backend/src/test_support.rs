//! Shared helpers for the unit tests.
//!
//! Builds throwaway application state and page-bridge extractors so handler
//! tests can call the real functions directly.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::Request;
use axum::response::Response;
use tokio::sync::RwLock;

use inertia::{Inertia, InertiaConfig};
use sqlx::SqlitePool;

use crate::AppState;

pub fn test_state(pool: SqlitePool) -> AppState {
    AppState {
        pool,
        sessions: Arc::new(RwLock::new(HashMap::new())),
        inertia: InertiaConfig::new("EvalDesk", None),
    }
}

/// Extractor for a plain browser GET.
pub async fn inertia_request(uri: &str) -> Inertia {
    build_inertia(uri, false).await
}

/// Extractor for a client-bridge GET, so responses carry the page object as
/// JSON.
pub async fn inertia_page_request(uri: &str) -> Inertia {
    build_inertia(uri, true).await
}

async fn build_inertia(uri: &str, protocol_visit: bool) -> Inertia {
    let mut builder = Request::builder().uri(uri);
    if protocol_visit {
        builder = builder.header(inertia::INERTIA_HEADER, "true");
    }
    let request = builder.body(()).unwrap();
    let (mut parts, _) = request.into_parts();
    Inertia::from_request_parts(&mut parts, &()).await.unwrap()
}

/// Parse the page object out of a protocol response body.
pub async fn page_object(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
