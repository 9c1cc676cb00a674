//! Rust structs that represent database table mappings.
//!
//! These models define the structure of data as it is stored in and retrieved
//! from the database. Note that these may differ from API-specific models.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Full row from `users`.
///
/// Carries the password hash, so it deliberately does not implement
/// `Serialize`; anything that crosses to the rendering layer goes through
/// the presenter's view types instead.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub terms_accepted_version: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Named permission grouping, attached to users through `role_user`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Role {
    pub id: i64,
    pub name: String,
}

/// A user together with whatever roles the best-effort enrichment produced.
#[derive(Debug, Clone)]
pub struct UserWithRoles {
    pub user: User,
    pub roles: Vec<Role>,
}

/// Insert payload for `users`. The hash is produced by the auth service;
/// raw passwords never reach this layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}
