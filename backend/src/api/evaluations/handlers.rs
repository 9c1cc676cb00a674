//! Handler functions for the evaluations API.
//!
//! These functions process requests for the evaluation worklist and format
//! the responses through the presenter.

use axum::extract::State;
use axum::response::Response;
use axum::Extension;

use inertia::Inertia;

use crate::auth::middleware::CurrentUser;
use crate::errors::AppError;
use crate::services::presenter;
use crate::AppState;

/// GET /evaluations. Serves the placeholder listing until the grading data
/// source lands.
pub async fn index(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    inertia: Inertia,
) -> Result<Response, AppError> {
    user.ok_or(AppError::Unauthorized)?;
    Ok(inertia.render(
        &state.inertia,
        "evaluations/index",
        presenter::evaluations_props(),
    ))
}
