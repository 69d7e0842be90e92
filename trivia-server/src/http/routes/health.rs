//! Readiness check
//!
//! Answers 200 only when the store completes a round trip, so a load balancer
//! stops routing to an instance whose database went away.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub success: bool,
    pub store: &'static str,
    pub version: &'static str,
}

/// GET /health - 500 envelope when the store is unreachable
async fn readiness(State(state): State<AppState>) -> Result<Json<ReadinessResponse>, ApiError> {
    state.store().ping().await?;

    Ok(Json(ReadinessResponse {
        success: true,
        store: "reachable",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(readiness))
}
