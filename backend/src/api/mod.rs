//! Central module for organizing the application's main API endpoints.
//!
//! This module acts as a top-level container for different page domains,
//! such as the dashboard, evaluations, and static pages, excluding core
//! authentication routes which are handled separately.

pub mod evaluations;
pub mod pages;
pub mod user;
