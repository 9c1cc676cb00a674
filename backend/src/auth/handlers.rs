//! Handler functions for authentication-related API endpoints.
//!
//! These functions process incoming HTTP requests for user authentication
//! (login, registration, logout), parse request data, validate input, and
//! interact with the `auth::service` for core business logic.

use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Extension, Json};
use serde_json::json;

use inertia::Inertia;

use crate::auth::middleware::CurrentUser;
use crate::auth::models::{LoginRequest, RegisterRequest};
use crate::auth::service;
use crate::errors::AppError;
use crate::utils;
use crate::AppState;

/// GET /login. Signed-in visitors go straight to the dashboard.
pub async fn show_login(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    inertia: Inertia,
) -> Response {
    if user.is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    inertia.render(&state.inertia, "auth/login", json!({}))
}

/// GET /register. Signed-in visitors go straight to the dashboard.
pub async fn show_register(
    State(state): State<AppState>,
    user: Option<Extension<CurrentUser>>,
    inertia: Inertia,
) -> Response {
    if user.is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    inertia.render(&state.inertia, "auth/register", json!({}))
}

/// POST /login. Validates the payload, checks the credential, and opens a
/// session.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    let credentials = payload.validate_into()?;
    let user = service::authenticate(&state.pool, &credentials).await?;
    open_session(&state, user.id).await
}

/// POST /register. Validates the payload, creates the account, and signs the
/// new user in immediately.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Response, AppError> {
    let account = payload.validate_into()?;
    let user = service::register(&state.pool, account).await?;
    open_session(&state, user.id).await
}

/// POST /logout. Drops the session if there is one; logging out while logged
/// out is not an error.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(sid) = utils::parse_cookie(&headers, utils::SESSION_COOKIE) {
        state.sessions.write().await.remove(&sid);
    }
    let mut out = HeaderMap::new();
    out.insert(header::SET_COOKIE, utils::clear_session_cookie());
    (out, Redirect::to("/login")).into_response()
}

async fn open_session(state: &AppState, user_id: i64) -> Result<Response, AppError> {
    let sid = utils::random_token(16)?;
    state.sessions.write().await.insert(sid.clone(), user_id);
    let mut headers = HeaderMap::new();
    headers.insert(header::SET_COOKIE, utils::session_cookie(&sid));
    Ok((headers, Redirect::to("/dashboard")).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_pool;
    use crate::test_support::{inertia_request, test_state};
    use axum::http::StatusCode;

    fn login_payload(email: &str, password: &str) -> Json<LoginRequest> {
        Json(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    fn register_payload(email: &str) -> Json<RegisterRequest> {
        Json(RegisterRequest {
            full_name: "Ada Lovelace".to_string(),
            email: email.to_string(),
            password: "correct horse battery".to_string(),
            password_confirmation: "correct horse battery".to_string(),
        })
    }

    #[tokio::test]
    async fn register_opens_a_session_and_redirects_to_the_dashboard() {
        let state = test_state(test_pool().await);
        let response = register(State(state.clone()), register_payload("ada@example.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
        assert!(response.headers().contains_key(header::SET_COOKIE));
        assert_eq!(state.sessions.read().await.len(), 1);
    }

    #[tokio::test]
    async fn login_accepts_the_registered_credential() {
        let state = test_state(test_pool().await);
        register(State(state.clone()), register_payload("ada@example.com"))
            .await
            .unwrap();

        let response = login(
            State(state.clone()),
            login_payload("ada@example.com", "correct horse battery"),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
        assert_eq!(state.sessions.read().await.len(), 2);
    }

    #[tokio::test]
    async fn login_normalizes_the_email_before_the_lookup() {
        let state = test_state(test_pool().await);
        register(State(state.clone()), register_payload("ada@example.com"))
            .await
            .unwrap();

        let response = login(
            State(state.clone()),
            login_payload("  ada@EXAMPLE.com ", "correct horse battery"),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn bad_credentials_come_back_as_a_form_error() {
        let state = test_state(test_pool().await);
        let err = login(
            State(state),
            login_payload("ghost@example.com", "whatever"),
        )
        .await
        .unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        assert!(errors.contains_key("email"));
    }

    #[tokio::test]
    async fn invalid_login_payload_reports_both_fields() {
        let state = test_state(test_pool().await);
        let err = login(State(state), login_payload("nope", ""))
            .await
            .unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("password"));
    }

    #[tokio::test]
    async fn duplicate_registration_reports_the_email_field() {
        let state = test_state(test_pool().await);
        register(State(state.clone()), register_payload("ada@example.com"))
            .await
            .unwrap();
        let err = register(State(state), register_payload("ada@example.com"))
            .await
            .unwrap_err();
        let AppError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        assert_eq!(errors["email"], vec!["This email is already registered"]);
    }

    #[tokio::test]
    async fn login_form_renders_for_guests_and_redirects_members() {
        let state = test_state(test_pool().await);
        let inertia = inertia_request("/login").await;
        let response = show_login(State(state.clone()), None, inertia).await;
        assert_eq!(response.status(), StatusCode::OK);

        register(State(state.clone()), register_payload("ada@example.com"))
            .await
            .unwrap();
        let user = crate::database::queries::find_user_by_email(&state.pool, "ada@example.com")
            .await
            .unwrap()
            .unwrap();
        let inertia = inertia_request("/login").await;
        let response =
            show_login(State(state), Some(Extension(CurrentUser(user))), inertia).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/dashboard");
    }

    #[tokio::test]
    async fn logout_clears_the_session_and_cookie() {
        let state = test_state(test_pool().await);
        let response = register(State(state.clone()), register_payload("ada@example.com"))
            .await
            .unwrap();
        let cookie = response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .to_string();
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, cookie.parse().unwrap());

        let response = logout(State(state.clone()), headers).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/login");
        assert!(response.headers()[header::SET_COOKIE]
            .to_str()
            .unwrap()
            .contains("Expires=Thu, 01 Jan 1970"));
        assert!(state.sessions.read().await.is_empty());
    }

    #[tokio::test]
    async fn logout_without_a_session_still_redirects() {
        let state = test_state(test_pool().await);
        let response = logout(State(state), HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}
