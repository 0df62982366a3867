use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::database::store::TriviaStore;
use crate::error::Result;
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
    quiz::QuizScope,
};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_category_id: i32,
    next_question_id: i32,
}

/// In-process store with the same ordering and matching rules as
/// [`PgTriviaStore`](crate::database::PgTriviaStore). Ids are never reused.
#[derive(Debug, Default)]
pub struct MemoryTriviaStore {
    tables: RwLock<Tables>,
}

impl MemoryTriviaStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_category(&self, kind: &str) -> Category {
        let mut tables = self.tables.write().await;
        tables.next_category_id += 1;
        let category = Category {
            id: tables.next_category_id,
            kind: kind.to_string(),
        };
        tables.categories.insert(category.id, category.clone());
        category
    }
}

#[async_trait]
impl TriviaStore for MemoryTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        let tables = self.tables.read().await;
        Ok(tables.categories.get(&id).cloned())
    }

    async fn count_questions(&self) -> Result<i64> {
        let tables = self.tables.read().await;
        Ok(tables.questions.len() as i64)
    }

    async fn questions_page(&self, offset: i64, limit: i64) -> Result<Vec<Question>> {
        let tables = self.tables.read().await;
        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(tables
            .questions
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn last_questions(&self, limit: i64) -> Result<Vec<Question>> {
        let tables = self.tables.read().await;
        let limit = usize::try_from(limit).unwrap_or(0);
        let skip = tables.questions.len().saturating_sub(limit);
        Ok(tables.questions.values().skip(skip).cloned().collect())
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        let tables = self.tables.read().await;
        Ok(tables.questions.get(&id).cloned())
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question> {
        let mut tables = self.tables.write().await;
        tables.next_question_id += 1;
        let inserted = question.clone().into_question(tables.next_question_id);
        tables.questions.insert(inserted.id, inserted.clone());
        Ok(inserted)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.questions.remove(&id).is_some())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let needle = term.to_lowercase();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn quiz_candidates(&self, scope: QuizScope, exclude: &[i32]) -> Result<Vec<Question>> {
        let category = scope.category_key();
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| !exclude.contains(&q.id))
            .filter(|q| category.as_deref().map_or(true, |c| q.category == c))
            .cloned()
            .collect())
    }
}
