//! Module for the static informational pages.
//!
//! This module serves the public pages that need no data beyond the shared
//! shell: about, contact, and privacy.

pub mod handlers;
pub mod routes;
