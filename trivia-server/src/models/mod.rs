//! Domain models
//!
//! Request bodies are checked for presence when converted into these types.
//! Nothing beyond presence is validated.

pub mod validation;
pub mod category;
pub mod question;
pub mod quiz;
pub mod pagination;

pub use validation::ValidationError;
pub use category::{Category, CategoryMap};
pub use question::{CategoryRef, CreateQuestionRequest, NewQuestion, Question, SearchRequest};
pub use quiz::{QuizCategory, QuizRequest, QuizRound};
pub use pagination::{Paginated, Pagination, PaginationParams, QUESTIONS_PER_PAGE};
