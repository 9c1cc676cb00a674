//! Module for the evaluations API.
//!
//! This module defines the public interface and structure for the evaluation
//! worklist pages. The data source behind them has not landed yet, so the
//! handlers serve the agreed placeholder shape.

pub mod handlers;
pub mod routes;
