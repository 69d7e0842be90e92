//! The storage seam shared by every handler

use async_trait::async_trait;

use crate::models::{Category, NewQuestion, Paginated, Pagination, Question};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Reads and writes against the questions and categories tables.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories ordered by type.
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_category(&self, id: i32) -> Result<Option<Category>, StoreError>;

    /// One page of all questions ordered by id.
    async fn list_questions(&self, page: Pagination) -> Result<Paginated<Question>, StoreError>;

    /// One page of the questions filed under `category_id`, ordered by id.
    async fn questions_in_category(
        &self,
        category_id: i32,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError>;

    /// Questions whose text contains `term`, ignoring case.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;

    /// Insert a question and return its id.
    async fn create_question(&self, question: NewQuestion) -> Result<i32, StoreError>;

    /// Delete a question. Missing ids are [`StoreError::NotFound`].
    async fn delete_question(&self, id: i32) -> Result<(), StoreError>;

    /// Questions eligible for the next quiz round: in `category` (or any
    /// category when `None`) and not listed in `exclude`.
    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, StoreError>;

    /// Cheap round trip proving the store can serve requests.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Release any held resources. Called once on shutdown.
    async fn close(&self) {}
}
