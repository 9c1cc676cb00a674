//! Module for user profile and management API endpoints.
//!
//! This module handles functionalities related to user information that is
//! distinct from the core authentication process, such as the signed-in
//! dashboard.

pub mod handlers;
pub mod routes;
