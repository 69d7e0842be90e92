//! In-memory store
//!
//! Mirrors the PostgreSQL store's ordering and matching rules over plain
//! vectors behind a tokio `RwLock`.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{StoreError, TriviaStore};
use crate::models::{Category, NewQuestion, Paginated, Pagination, Question};

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
}

/// Store holding everything in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with rows. Question ids are kept; new
    /// questions get ids after the largest one given.
    pub fn with_data(categories: Vec<Category>, mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|q| q.id);
        let next_question_id = questions.last().map_or(1, |q| q.id + 1);
        Self {
            tables: RwLock::new(Tables {
                categories,
                questions,
                next_question_id,
            }),
        }
    }

    /// Number of stored questions.
    pub async fn question_count(&self) -> usize {
        self.tables.read().await.questions.len()
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut categories = self.tables.read().await.categories.clone();
        categories.sort_by(|a, b| a.kind.cmp(&b.kind));
        Ok(categories)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self, page: Pagination) -> Result<Paginated<Question>, StoreError> {
        let tables = self.tables.read().await;
        Ok(page.paginate(&tables.questions))
    }

    async fn questions_in_category(
        &self,
        category_id: i32,
        page: Pagination,
    ) -> Result<Paginated<Question>, StoreError> {
        let category = category_id.to_string();
        let tables = self.tables.read().await;
        let matching: Vec<Question> = tables
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect();
        Ok(page.paginate(&matching))
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn create_question(&self, question: NewQuestion) -> Result<i32, StoreError> {
        let mut tables = self.tables.write().await;
        let id = tables.next_question_id.max(1);
        tables.next_question_id = id + 1;
        tables.questions.push(Question {
            id,
            question: question.question,
            answer: question.answer,
            category: question.category,
            difficulty: question.difficulty,
        });
        Ok(id)
    }

    async fn delete_question(&self, id: i32) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let index = tables
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| StoreError::NotFound {
                resource: "question",
                id: id.to_string(),
            })?;
        tables.questions.remove(index);
        Ok(())
    }

    async fn quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> Result<Vec<Question>, StoreError> {
        let category = category.map(|id| id.to_string());
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .iter()
            .filter(|q| category.as_ref().map_or(true, |c| &q.category == c))
            .filter(|q| !exclude.contains(&q.id))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i32, text: &str, category: &str) -> Question {
        Question {
            id,
            question: text.into(),
            answer: "answer".into(),
            category: category.into(),
            difficulty: 1,
        }
    }

    fn seeded() -> MemoryStore {
        MemoryStore::with_data(
            vec![
                Category { id: 1, kind: "Science".into() },
                Category { id: 2, kind: "Art".into() },
            ],
            vec![
                question(2, "Who painted the Mona Lisa?", "2"),
                question(1, "What is the boiling point of water?", "1"),
                question(3, "What is the chemical symbol for gold?", "1"),
            ],
        )
    }

    #[tokio::test]
    async fn categories_ordered_by_type() {
        let store = seeded();
        let kinds: Vec<_> = store
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.kind)
            .collect();
        assert_eq!(kinds, vec!["Art", "Science"]);
    }

    #[tokio::test]
    async fn questions_ordered_by_id() {
        let store = seeded();
        let page = store.list_questions(Pagination::default()).await.unwrap();
        let ids: Vec<_> = page.items.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(page.total, 3);
    }

    #[tokio::test]
    async fn create_assigns_next_id() {
        let store = seeded();
        let id = store
            .create_question(NewQuestion {
                question: "q".into(),
                answer: "a".into(),
                difficulty: 1,
                category: "1".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, 4);
        assert_eq!(store.question_count().await, 4);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let store = seeded();
        store.delete_question(2).await.unwrap();
        let err = store.delete_question(2).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { resource: "question", .. }));
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let store = seeded();
        let found = store.search_questions("MONA").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[tokio::test]
    async fn category_filter() {
        let store = seeded();
        let page = store
            .questions_in_category(1, Pagination::default())
            .await
            .unwrap();
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|q| q.category == "1"));
    }

    #[tokio::test]
    async fn quiz_candidates_skip_previous() {
        let store = seeded();
        let all = store.quiz_candidates(None, &[1, 2]).await.unwrap();
        assert_eq!(all.iter().map(|q| q.id).collect::<Vec<_>>(), vec![3]);

        let science = store.quiz_candidates(Some(1), &[3]).await.unwrap();
        assert_eq!(science.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1]);
    }
}
