//! Data structures for authentication-related entities.
//!
//! This module defines the form payloads for login and registration, the
//! declarative rules that validate them, and the normalized credential types
//! the rest of the authentication flow consumes.

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Login form payload as posted by the client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration form payload as posted by the client.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 255, message = "Full name must be between 2 and 255 characters"))]
    pub full_name: String,
    #[validate(
        length(max = 255, message = "Email must be at most 255 characters"),
        email(message = "Enter a valid email address")
    )]
    pub email: String,
    #[validate(
        length(min = 8, max = 255, message = "Password must be between 8 and 255 characters"),
        must_match(other = "password_confirmation", message = "Password confirmation does not match")
    )]
    pub password: String,
    pub password_confirmation: String,
}

/// Credentials that passed login validation; the only input sign-in accepts.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// A validated, normalized registration; the only input account creation
/// accepts.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Validate and normalize in one step. The email is canonicalized before
    /// the syntax check; the password passes through untouched. Violations
    /// across both fields are reported together.
    pub fn validate_into(self) -> Result<LoginCredentials, ValidationErrors> {
        let normalized = Self {
            email: normalize_email(&self.email),
            password: self.password,
        };
        normalized.validate()?;
        Ok(LoginCredentials {
            email: normalized.email,
            password: normalized.password,
        })
    }
}

impl RegisterRequest {
    /// Validate and normalize in one step, reporting every violation rather
    /// than stopping at the first.
    pub fn validate_into(self) -> Result<NewAccount, ValidationErrors> {
        let normalized = Self {
            full_name: self.full_name.trim().to_string(),
            email: normalize_email(&self.email),
            password: self.password,
            password_confirmation: self.password_confirmation,
        };
        normalized.validate()?;
        Ok(NewAccount {
            full_name: normalized.full_name,
            email: normalized.email,
            password: normalized.password,
        })
    }
}

/// Canonical address form: surrounding whitespace stripped and the domain
/// lowercased. The local part is preserved byte for byte; provider-specific
/// rules such as dot or plus-tag stripping are intentionally not applied.
pub fn normalize_email(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => trimmed.to_string(),
    }
}
