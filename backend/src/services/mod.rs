//! Module for core business logic services.
//!
//! This module encapsulates services that perform specific business operations
//! and orchestrate interactions between different parts of the application,
//! such as enriching accounts with roles or assembling page props.

pub mod accounts;
pub mod presenter;
