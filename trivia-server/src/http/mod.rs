//! HTTP server layer
//!
//! Axum server with:
//! - CORS open to any origin
//! - Request tracing
//! - Graceful shutdown with explicit store teardown
//! - JSON error envelopes, including for unknown routes and methods

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

pub use server::{build_router, run_server, serve, ServerConfig, ServerError};
pub use error::ApiError;
