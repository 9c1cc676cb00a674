//! Handler functions for user profile and management API endpoints.
//!
//! These functions process requests for user data, interact with the database
//! or relevant services, and return user-specific information.

use axum::extract::State;
use axum::response::Response;
use axum::Extension;

use inertia::Inertia;

use crate::auth::middleware::CurrentUser;
use crate::errors::AppError;
use crate::services::accounts::{self, SqlRoleStore};
use crate::services::presenter;
use crate::AppState;

/// GET /dashboard. Loads the signed-in user with their roles and renders the
/// landing page.
pub async fn dashboard(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    inertia: Inertia,
) -> Result<Response, AppError> {
    let Extension(CurrentUser(user)) = user.ok_or(AppError::Unauthorized)?;
    let store = SqlRoleStore::new(&state.pool);
    let loaded = accounts::load_user_with_roles(&store, user).await;
    Ok(inertia.render(&state.inertia, "dashboard", presenter::dashboard_props(&loaded)))
}
