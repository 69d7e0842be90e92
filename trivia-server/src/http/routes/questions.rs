//! Question endpoints

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, QueryParams};
use crate::models::{
    CategoryMap, CreateQuestionRequest, NewQuestion, Pagination, PaginationParams, Question,
    SearchRequest,
};
use crate::state::AppState;

/// GET /questions response
#[derive(Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// POST /questions/search response
#[derive(Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<String>,
}

#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

/// GET /questions?page=N - one page of all questions plus the category map
async fn list_questions(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PaginationParams>,
) -> Result<Json<QuestionPageResponse>, ApiError> {
    let page = Pagination::from(params);
    let store = state.store();

    let questions = store.list_questions(page).await?;
    if questions.is_empty() {
        return Err(ApiError::not_found("questions page", page.page));
    }
    let categories = CategoryMap::from(store.list_categories().await?);

    Ok(Json(QuestionPageResponse {
        success: true,
        questions: questions.items,
        total_questions: questions.total,
        categories,
        current_category: None,
    }))
}

/// POST /questions - insert a question; every field must be present
async fn create_question(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let question = NewQuestion::try_from(req)?;
    let id = state
        .store()
        .create_question(question)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::info!(id, "question created");
    Ok(Json(CreatedResponse {
        success: true,
        created: id,
    }))
}

/// DELETE /questions/{id} - any failure, including a missing id, is 422
async fn delete_question(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id: i32 = raw_id
        .parse()
        .map_err(|_| ApiError::unprocessable(format!("invalid question id '{}'", raw_id)))?;

    state
        .store()
        .delete_question(id)
        .await
        .map_err(ApiError::unprocessable)?;

    tracing::info!(id, "question deleted");
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
    }))
}

/// POST /questions/search - case-insensitive substring match on question text
async fn search_questions(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
    let term = req
        .term()
        .map_err(|e| ApiError::not_found("searchTerm", e))?;

    let questions = state.store().search_questions(&term).await?;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        current_category: None,
    }))
}

/// Question routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{id}", delete(delete_question))
}
