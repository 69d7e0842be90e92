//! Category endpoints

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, QueryParams};
use crate::models::{CategoryMap, PaginationParams, Question};
use crate::state::AppState;

/// GET /categories response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// GET /categories/{id}/questions response
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: String,
}

/// GET /categories - every category as an id to type map
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = CategoryMap::from(state.store().list_categories().await?);
    if categories.is_empty() {
        return Err(ApiError::not_found("categories", "*"));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories,
    }))
}

/// GET /categories/{id}/questions - one page of a category's questions
async fn questions_by_category(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    QueryParams(params): QueryParams<PaginationParams>,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let store = state.store();
    let category = store
        .get_category(id)
        .await?
        .ok_or_else(|| ApiError::bad_request(format!("category {} does not exist", id)))?;

    let page = store.questions_in_category(category.id, params.into()).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: page.items,
        total_questions: page.total,
        current_category: category.kind,
    }))
}

/// Category routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(questions_by_category))
}
