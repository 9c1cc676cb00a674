//! Custom error types specific to authentication failures.
//!
//! This module defines a comprehensive set of errors that can occur during
//! authentication processes, providing clear and structured error responses.

use thiserror::Error;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password; deliberately does not say which.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email is already registered")]
    EmailTaken,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::field("email", "These credentials do not match our records")
            }
            AuthError::EmailTaken => AppError::field("email", "This email is already registered"),
            AuthError::Hash(message) => AppError::Internal(message),
            AuthError::Database(err) => AppError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failures_surface_as_form_errors() {
        let err: AppError = AuthError::InvalidCredentials.into();
        let AppError::Validation(errors) = err else {
            panic!("expected a validation error");
        };
        assert_eq!(errors["email"], vec!["These credentials do not match our records"]);
    }

    #[test]
    fn infrastructure_failures_stay_internal() {
        assert!(matches!(
            AuthError::Hash("no entropy".to_string()).into(),
            AppError::Internal(_)
        ));
        assert!(matches!(
            AuthError::Database(sqlx::Error::PoolClosed).into(),
            AppError::Database(_)
        ));
    }
}
