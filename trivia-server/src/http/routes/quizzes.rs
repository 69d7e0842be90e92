//! Quiz endpoint

use axum::{extract::State, routing::post, Json, Router};
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::{Question, QuizRequest, QuizRound};
use crate::state::AppState;

#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `None` once every eligible question has been asked
    pub question: Option<Question>,
}

/// POST /quizzes - a random question not asked yet in this round
async fn next_question(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let round = QuizRound::try_from(req)?;
    let store = state.store();

    if let Some(id) = round.category {
        if store.get_category(id).await?.is_none() {
            return Err(ApiError::bad_request(format!("category {} does not exist", id)));
        }
    }

    let candidates = store
        .quiz_candidates(round.category, &round.previous_questions)
        .await?;
    let question = candidates.choose(&mut rand::thread_rng()).cloned();

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(next_question))
}
