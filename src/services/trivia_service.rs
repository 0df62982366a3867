use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::database::store::TriviaStore;
use crate::dto::trivia_dto::{CreateQuestionPayload, QuizPayload};
use crate::error::{Error, Result};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
    quiz::QuizScope,
};

pub const QUESTIONS_PER_PAGE: i64 = 10;

#[derive(Clone)]
pub struct TriviaService {
    store: Arc<dyn TriviaStore>,
}

#[derive(Debug)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total: i64,
    pub categories: Vec<Category>,
}

#[derive(Debug)]
pub struct CategoryQuestions {
    pub questions: Vec<Question>,
    pub category: Category,
}

impl TriviaService {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self { store }
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = self.store.list_categories().await?;
        if categories.is_empty() {
            return Err(Error::NotFound("no categories".to_string()));
        }
        Ok(categories)
    }

    pub async fn list_questions(&self, page: i64) -> Result<QuestionPage> {
        let offset = page
            .checked_sub(1)
            .filter(|p| *p >= 0)
            .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
            .ok_or_else(|| Error::NotFound(format!("page {} is out of range", page)))?;

        let questions = self.store.questions_page(offset, QUESTIONS_PER_PAGE).await?;
        if questions.is_empty() {
            return Err(Error::NotFound(format!("page {} is empty", page)));
        }
        let total = self.store.count_questions().await?;
        let categories = self.store.list_categories().await?;
        debug!(page, returned = questions.len(), total, "questions page");

        Ok(QuestionPage {
            questions,
            total,
            categories,
        })
    }

    pub async fn delete_question(&self, id: i32) -> Result<i32> {
        if self.store.get_question(id).await?.is_none() {
            return Err(Error::Unprocessable(format!("question {} does not exist", id)));
        }
        if !self.store.delete_question(id).await? {
            return Err(Error::Unprocessable(format!("question {} was not deleted", id)));
        }
        info!(question_id = id, "question deleted");
        Ok(id)
    }

    /// Inserts the question and returns the last page of the full list.
    pub async fn create_question(&self, payload: CreateQuestionPayload) -> Result<Vec<Question>> {
        let new_question = NewQuestion::try_from(payload)?;
        let inserted = self.store.insert_question(&new_question).await?;
        info!(question_id = inserted.id, category = %inserted.category, "question created");
        self.store.last_questions(QUESTIONS_PER_PAGE).await
    }

    pub async fn search_questions(&self, search_term: Option<String>) -> Result<Vec<Question>> {
        let search_term =
            search_term.ok_or_else(|| Error::Unprocessable("searchTerm is missing".to_string()))?;
        let term = search_term.trim();
        if term.is_empty() {
            return Err(Error::NotFound("empty search term".to_string()));
        }
        let matches = self.store.search_questions(term).await?;
        debug!(term, matches = matches.len(), "question search");
        Ok(matches)
    }

    pub async fn questions_by_category(&self, category_id: i32) -> Result<CategoryQuestions> {
        let questions = self
            .store
            .questions_in_category(&category_id.to_string())
            .await?;
        let category = self
            .store
            .get_category(category_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("category {} does not exist", category_id)))?;
        Ok(CategoryQuestions {
            questions,
            category,
        })
    }

    /// Picks a random question in scope that was not played yet, or `None`
    /// once the scope is exhausted.
    pub async fn next_quiz_question(&self, payload: QuizPayload) -> Result<Option<Question>> {
        let scope: QuizScope = payload
            .quiz_category
            .ok_or_else(|| Error::Unprocessable("quiz_category is missing".to_string()))?
            .try_into()?;
        let previous = payload
            .previous_questions
            .ok_or_else(|| Error::Unprocessable("previous_questions is missing".to_string()))?;

        let candidates = self.store.quiz_candidates(scope, &previous).await?;
        let picked = candidates.choose(&mut rand::thread_rng()).cloned();
        debug!(
            ?scope,
            played = previous.len(),
            candidates = candidates.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "quiz turn"
        );
        Ok(picked)
    }
}
