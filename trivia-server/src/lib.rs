//! trivia-server: HTTP API for a trivia game
//!
//! Questions and categories live in PostgreSQL (or in memory for tests and
//! database-less runs) and are served as JSON envelopes over axum.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{MemoryStore, PgStore, StoreError, TriviaStore};
pub use http::{build_router, run_server, serve, ApiError, ServerConfig, ServerError};
pub use state::AppState;
