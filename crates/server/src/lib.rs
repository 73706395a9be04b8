//! seoscore-server: HTTP API for storing and scoring articles.
//!
//! Scoring itself lives in `seoscore-core`.

/// REST API layer: Axum router, handlers, models and errors.
pub mod api;
/// Command-line and environment configuration.
pub mod config;
/// Article records and their in-memory or PostgreSQL store.
pub mod store;
