//! Database query functions (Data Access Objects).
//!
//! This module centralizes all direct database operations, providing reusable
//! functions for interacting with the database and abstracting the query logic
//! from higher-level services and API handlers.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::database::models::{NewUser, Role, User};

pub async fn find_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, full_name, email, password_hash, terms_accepted_version, created_at, updated_at \
         FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn find_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        "SELECT id, full_name, email, password_hash, terms_accepted_version, created_at, updated_at \
         FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Insert a user and return the stored row.
pub async fn insert_user(pool: &SqlitePool, new: &NewUser) -> Result<User, sqlx::Error> {
    let now = Utc::now();
    let result = sqlx::query(
        "INSERT INTO users (full_name, email, password_hash, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&new.full_name)
    .bind(&new.email)
    .bind(&new.password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    // The row was just written; absence here is a real error.
    find_user_by_id(pool, result.last_insert_rowid())
        .await?
        .ok_or(sqlx::Error::RowNotFound)
}

/// All roles attached to a user, in stable name order.
pub async fn roles_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Role>, sqlx::Error> {
    sqlx::query_as::<_, Role>(
        "SELECT r.id, r.name FROM roles r \
         JOIN role_user ru ON ru.role_id = r.id \
         WHERE ru.user_id = ? \
         ORDER BY r.name",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
pub async fn attach_role(pool: &SqlitePool, user_id: i64, name: &str) -> Role {
    let role_id = sqlx::query("INSERT INTO roles (name) VALUES (?)")
        .bind(name)
        .execute(pool)
        .await
        .expect("insert role")
        .last_insert_rowid();
    sqlx::query("INSERT INTO role_user (user_id, role_id) VALUES (?, ?)")
        .bind(user_id)
        .bind(role_id)
        .execute(pool)
        .await
        .expect("link role");
    Role {
        id: role_id,
        name: name.to_string(),
    }
}
