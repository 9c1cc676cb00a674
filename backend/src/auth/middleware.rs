//! Middleware for protecting authenticated routes and handling authorization.
//!
//! This module resolves the session cookie once per request and enforces the
//! signed-in requirement on the pages that need it.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::database::models::User;
use crate::database::queries;
use crate::utils::{parse_cookie, SESSION_COOKIE};
use crate::AppState;

/// The signed-in user for this request, inserted by [`attach_current_user`].
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Resolve the session cookie to a user row and stash it in the request
/// extensions. Applied to the whole router; requests without a valid session
/// simply pass through without the extension.
pub async fn attach_current_user(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(sid) = parse_cookie(request.headers(), SESSION_COOKIE) {
        let user_id = { state.sessions.read().await.get(&sid).copied() };
        if let Some(user_id) = user_id {
            match queries::find_user_by_id(&state.pool, user_id).await {
                Ok(Some(user)) => {
                    request.extensions_mut().insert(CurrentUser(user));
                }
                Ok(None) => {
                    // Session points at a deleted account; drop it.
                    state.sessions.write().await.remove(&sid);
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to load session user");
                }
            }
        }
    }
    next.run(request).await
}

/// Guard for pages that require a signed-in user; guests are sent to the
/// login form.
pub async fn require_auth(request: Request, next: Next) -> Response {
    if request.extensions().get::<CurrentUser>().is_none() {
        return Redirect::to("/login").into_response();
    }
    next.run(request).await
}
