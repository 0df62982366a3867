use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    /// Category id in its stored text form.
    pub category: String,
    pub difficulty: i32,
}

/// A validated question that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

impl NewQuestion {
    pub fn into_question(self, id: i32) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}
