//! Quiz round requests

use serde::Deserialize;

use super::{CategoryRef, ValidationError};

/// Category selector sent by the quiz client. `id` 0 means every category.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: CategoryRef,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// POST /quizzes body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i32>>,
    pub quiz_category: Option<QuizCategory>,
}

/// A checked quiz request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    pub previous_questions: Vec<i32>,
    /// `None` draws from all categories
    pub category: Option<i32>,
}

impl TryFrom<QuizRequest> for QuizRound {
    type Error = ValidationError;

    fn try_from(req: QuizRequest) -> Result<Self, Self::Error> {
        let previous_questions = req
            .previous_questions
            .ok_or(ValidationError::Missing { field: "previous_questions" })?;
        let selector = req
            .quiz_category
            .ok_or(ValidationError::Missing { field: "quiz_category" })?;

        let id = match selector.id {
            CategoryRef::Id(id) => Some(id),
            CategoryRef::Text(text) => text.trim().parse::<i64>().ok(),
        }
        .and_then(|id| i32::try_from(id).ok())
        .ok_or(ValidationError::Missing { field: "quiz_category.id" })?;

        Ok(Self {
            previous_questions,
            category: (id != 0).then_some(id),
        })
    }
}
