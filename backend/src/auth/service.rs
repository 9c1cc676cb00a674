//! Core business logic for the authentication system.
//!
//! This service handles operations such as user creation, password hashing,
//! and credential checks. It orchestrates interactions between handlers and
//! the database.

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::{PasswordHash, SaltString};
use sqlx::SqlitePool;

use crate::auth::errors::AuthError;
use crate::auth::models::{LoginCredentials, NewAccount};
use crate::database::models::{NewUser, User};
use crate::database::queries;

/// Hash a password with Argon2id and a fresh random salt, producing a PHC
/// string for storage.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let mut salt_bytes = [0u8; 16];
    getrandom::getrandom(&mut salt_bytes).map_err(|e| AuthError::Hash(e.to_string()))?;
    let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::Hash(e.to_string()))?;
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::Hash(e.to_string()))?
        .to_string();
    Ok(hash)
}

/// Check a password against a stored PHC string. Unparseable hashes count as
/// a mismatch rather than an error.
pub fn verify_password(hash: &str, password: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Create an account from a validated registration.
///
/// Uniqueness is decided by the schema's UNIQUE constraint, not a prior
/// lookup, so two concurrent registrations for the same address cannot both
/// slip through; the loser gets `EmailTaken`.
pub async fn register(pool: &SqlitePool, account: NewAccount) -> Result<User, AuthError> {
    let password_hash = hash_password(&account.password)?;
    match queries::insert_user(
        pool,
        &NewUser {
            full_name: account.full_name,
            email: account.email,
            password_hash,
        },
    )
    .await
    {
        Ok(user) => Ok(user),
        Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(AuthError::EmailTaken),
        Err(err) => Err(AuthError::Database(err)),
    }
}

/// Check a validated login against the stored credential.
pub async fn authenticate(
    pool: &SqlitePool,
    credentials: &LoginCredentials,
) -> Result<User, AuthError> {
    let user = queries::find_user_by_email(pool, &credentials.email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;
    if verify_password(&user.password_hash, &credentials.password) {
        Ok(user)
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
