//! Trivia questions and the request bodies that create or find them

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// Question record as stored and as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id in text form
    pub category: String,
    pub difficulty: i32,
}

/// Category reference as clients send it: `4` or `"4"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(i64),
    Text(String),
}

impl CategoryRef {
    /// Text form stored in the `category` column
    pub fn into_stored(self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Text(text) => text,
        }
    }
}

/// POST /questions body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<CategoryRef>,
}

/// A question ready to insert; every field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: String,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        let question = req.question.ok_or(ValidationError::Missing { field: "question" })?;
        let answer = req.answer.ok_or(ValidationError::Missing { field: "answer" })?;
        let difficulty = req
            .difficulty
            .ok_or(ValidationError::Missing { field: "difficulty" })?;
        let category = req
            .category
            .ok_or(ValidationError::Missing { field: "category" })?
            .into_stored();

        Ok(Self {
            question,
            answer,
            difficulty,
            category,
        })
    }
}

/// POST /questions/search body.
///
/// `searchTerm` is kept as raw JSON: clients send strings, but numbers are
/// searched by their text and other falsy values count as no term.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<Value>,
}

impl SearchRequest {
    /// The term to match. Absent, null, `false`, zero, `""` and empty
    /// collections are all rejected.
    pub fn term(&self) -> Result<String, ValidationError> {
        const FIELD: &str = "searchTerm";
        match &self.search_term {
            None | Some(Value::Null) => Err(ValidationError::Missing { field: FIELD }),
            Some(Value::Bool(false)) => Err(ValidationError::Empty { field: FIELD }),
            Some(Value::Bool(true)) => Ok("True".to_owned()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => {
                Err(ValidationError::Empty { field: FIELD })
            }
            Some(Value::Number(n)) => Ok(n.to_string()),
            Some(Value::String(s)) if s.is_empty() => Err(ValidationError::Empty { field: FIELD }),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Array(a)) if a.is_empty() => Err(ValidationError::Empty { field: FIELD }),
            Some(Value::Object(o)) if o.is_empty() => Err(ValidationError::Empty { field: FIELD }),
            Some(other) => Ok(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> CreateQuestionRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn complete_request_converts() {
        let req = request(
            r#"{"question":"Largest planet?","answer":"Jupiter","difficulty":2,"category":1}"#,
        );
        let new = NewQuestion::try_from(req).unwrap();
        assert_eq!(new.answer, "Jupiter");
        assert_eq!(new.category, "1");
        assert_eq!(new.difficulty, 2);
    }

    #[test]
    fn category_accepts_string() {
        let req = request(r#"{"question":"q","answer":"a","difficulty":1,"category":"5"}"#);
        assert_eq!(NewQuestion::try_from(req).unwrap().category, "5");
    }

    #[test]
    fn missing_difficulty_is_rejected() {
        let req = request(r#"{"question":"q","answer":"a","category":"5"}"#);
        assert_eq!(
            NewQuestion::try_from(req).unwrap_err(),
            ValidationError::Missing { field: "difficulty" }
        );
    }

    #[test]
    fn null_counts_as_missing() {
        let req = request(r#"{"question":"q","answer":null,"difficulty":1,"category":"5"}"#);
        assert_eq!(
            NewQuestion::try_from(req).unwrap_err(),
            ValidationError::Missing { field: "answer" }
        );
    }

    fn search(json: &str) -> Result<String, ValidationError> {
        serde_json::from_str::<SearchRequest>(json).unwrap().term()
    }

    #[test]
    fn search_term_falsy_values_rejected() {
        for body in [
            "{}",
            r#"{"searchTerm":null}"#,
            r#"{"searchTerm":false}"#,
            r#"{"searchTerm":0}"#,
            r#"{"searchTerm":0.0}"#,
            r#"{"searchTerm":""}"#,
            r#"{"searchTerm":[]}"#,
        ] {
            assert!(search(body).is_err(), "{} should have no term", body);
        }
    }

    #[test]
    fn search_term_text_and_numbers() {
        assert_eq!(search(r#"{"searchTerm":"title"}"#).unwrap(), "title");
        assert_eq!(search(r#"{"searchTerm":42}"#).unwrap(), "42");
    }
}
