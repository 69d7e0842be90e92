//! PostgreSQL store
//!
//! - list operations page in SQL with `COUNT(*) OVER()` for the total
//! - deletes report missing rows via `rows_affected`, no check-then-delete

use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Row};

use super::store::{StoreError, TriviaStore};
use crate::models::{Category, NewQuestion, Paginated, Pagination, Question};

/// Store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn count_questions(&self, category: Option<&str>) -> Result<i64, StoreError> {
        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM questions
            WHERE ($1::text IS NULL OR category = $1)
            "#,
        )
        .bind(category)
        .fetch_one(&self.pool)
        .await?;
        Ok(total)
    }

    /// Shared paging query for the full listing and the per-category listing.
    async fn page_questions(
        &self,
        category: Option<&str>,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        if !page.is_selectable() {
            return Ok(Paginated {
                items: Vec::new(),
                total: self.count_questions(category).await?,
            });
        }

        let rows = sqlx::query(
            r#"
            SELECT id, question, answer, category, difficulty,
                   COUNT(*) OVER() AS total
            FROM questions
            WHERE ($1::text IS NULL OR category = $1)
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(category)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        // An out-of-range page returns no rows and therefore no window total.
        let total = match rows.first() {
            Some(row) => row.try_get::<i64, _>("total")?,
            None => self.count_questions(category).await?,
        };
        let items = rows
            .iter()
            .map(Question::from_row)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated { items, total })
    }
}

/// Escape LIKE metacharacters so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories ORDER BY type",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(categories)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, type FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(category)
    }

    async fn list_questions(&self, page: Pagination) -> Result<Paginated<Question>, StoreError> {
        self.page_questions(None, page).await
    }

    async fn questions_in_category(
        &self,
        category_id: i32,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        let category = category_id.to_string();
        self.page_questions(Some(&category), page).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1 ESCAPE '\'
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn create_question(&self, question: NewQuestion) -> Result<i32, StoreError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&question.question)
        .bind(&question.answer)
        .bind(&question.category)
        .bind(question.difficulty)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }
        Ok(())
    }

    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, StoreError> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::text IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY id
            "#,
        )
        .bind(category.map(|id| id.to_string()))
        .bind(exclude)
        .fetch_all(&self.pool)
        .await?;
        Ok(questions)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn close(&self) {
        tracing::info!("closing database pool");
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("title"), "%title%");
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    // Run with: DATABASE_URL=postgres://... cargo test -p trivia-server -- --ignored

    async fn test_store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        for ddl in [
            "CREATE TABLE IF NOT EXISTS categories (id SERIAL PRIMARY KEY, type TEXT NOT NULL)",
            "CREATE TABLE IF NOT EXISTS questions (id SERIAL PRIMARY KEY, \
             question TEXT NOT NULL, answer TEXT NOT NULL, category TEXT NOT NULL, \
             difficulty INTEGER NOT NULL)",
        ] {
            sqlx::query(ddl).execute(&pool).await.expect("schema setup failed");
        }
        PgStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_delete_question() {
        let store = test_store().await;
        let id = store
            .create_question(NewQuestion {
                question: "Which planet has the most moons?".into(),
                answer: "Saturn".into(),
                difficulty: 3,
                category: "1".into(),
            })
            .await
            .expect("insert failed");

        store.delete_question(id).await.expect("delete failed");

        let err = store.delete_question(id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn schema_rejects_null_columns() {
        let store = test_store().await;
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (NULL, 'a', '1', 1)",
        )
        .execute(store.pool())
        .await;
        assert!(result.is_err());

        // Every stored row decodes, so listings stay whole
        store
            .list_questions(Pagination::default())
            .await
            .expect("listing failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn beyond_last_page_is_empty() {
        let store = test_store().await;
        let page = store
            .list_questions(Pagination::new(i32::MAX as i64))
            .await
            .expect("query failed");
        assert!(page.is_empty());
    }
}
