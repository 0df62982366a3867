use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
    quiz::QuizScope,
};

/// Persistence seam for the trivia tables.
///
/// Every listing is ordered by ascending id. Lookups that can miss return
/// `Ok(None)` so callers decide which status a miss maps to; `Err` is reserved
/// for the store itself failing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn get_category(&self, id: i32) -> Result<Option<Category>>;

    async fn count_questions(&self) -> Result<i64>;
    async fn questions_page(&self, offset: i64, limit: i64) -> Result<Vec<Question>>;
    /// The trailing `limit` questions, still in ascending id order.
    async fn last_questions(&self, limit: i64) -> Result<Vec<Question>>;
    async fn get_question(&self, id: i32) -> Result<Option<Question>>;
    async fn insert_question(&self, question: &NewQuestion) -> Result<Question>;
    /// Returns whether a row was removed.
    async fn delete_question(&self, id: i32) -> Result<bool>;

    /// Case-insensitive literal substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;
    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>>;
    async fn quiz_candidates(&self, scope: QuizScope, exclude: &[i32]) -> Result<Vec<Question>>;
}
