use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::store::TriviaStore;
use crate::error::Result;
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
    quiz::QuizScope,
};

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Postgres-backed store. Each call checks a connection out of the pool for
/// its own duration and hands it back when the call returns.
#[derive(Clone)]
pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut conn = self.pool.acquire().await?;
        let categories =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&mut *conn)
                .await?;
        Ok(categories)
    }

    async fn get_category(&self, id: i32) -> Result<Option<Category>> {
        let mut conn = self.pool.acquire().await?;
        let category =
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        Ok(category)
    }

    async fn count_questions(&self) -> Result<i64> {
        let mut conn = self.pool.acquire().await?;
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&mut *conn)
            .await?;
        Ok(total)
    }

    async fn questions_page(&self, offset: i64, limit: i64) -> Result<Vec<Question>> {
        let mut conn = self.pool.acquire().await?;
        let query = format!(
            "SELECT {} FROM questions ORDER BY id LIMIT $1 OFFSET $2",
            QUESTION_COLUMNS
        );
        let items = sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&mut *conn)
            .await?;
        Ok(items)
    }

    async fn last_questions(&self, limit: i64) -> Result<Vec<Question>> {
        let mut conn = self.pool.acquire().await?;
        let query = format!(
            "SELECT {cols} FROM (
                SELECT {cols} FROM questions ORDER BY id DESC LIMIT $1
             ) AS tail
             ORDER BY id",
            cols = QUESTION_COLUMNS
        );
        let items = sqlx::query_as::<_, Question>(&query)
            .bind(limit)
            .fetch_all(&mut *conn)
            .await?;
        Ok(items)
    }

    async fn get_question(&self, id: i32) -> Result<Option<Question>> {
        let mut conn = self.pool.acquire().await?;
        let query = format!("SELECT {} FROM questions WHERE id = $1", QUESTION_COLUMNS);
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(question)
    }

    async fn insert_question(&self, question: &NewQuestion) -> Result<Question> {
        let mut conn = self.pool.acquire().await?;
        let query = format!(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES ($1, $2, $3, $4)
             RETURNING {}",
            QUESTION_COLUMNS
        );
        let inserted = sqlx::query_as::<_, Question>(&query)
            .bind(&question.question)
            .bind(&question.answer)
            .bind(&question.category)
            .bind(question.difficulty)
            .fetch_one(&mut *conn)
            .await?;
        Ok(inserted)
    }

    async fn delete_question(&self, id: i32) -> Result<bool> {
        let mut conn = self.pool.acquire().await?;
        let res = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let mut conn = self.pool.acquire().await?;
        let query = format!(
            r"SELECT {} FROM questions
              WHERE question ILIKE '%' || $1 || '%' ESCAPE '\'
              ORDER BY id",
            QUESTION_COLUMNS
        );
        let items = sqlx::query_as::<_, Question>(&query)
            .bind(escape_like(term))
            .fetch_all(&mut *conn)
            .await?;
        Ok(items)
    }

    async fn questions_in_category(&self, category: &str) -> Result<Vec<Question>> {
        let mut conn = self.pool.acquire().await?;
        let query = format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            QUESTION_COLUMNS
        );
        let items = sqlx::query_as::<_, Question>(&query)
            .bind(category)
            .fetch_all(&mut *conn)
            .await?;
        Ok(items)
    }

    async fn quiz_candidates(&self, scope: QuizScope, exclude: &[i32]) -> Result<Vec<Question>> {
        let mut conn = self.pool.acquire().await?;
        let items = match scope.category_key() {
            None => {
                let query = format!(
                    "SELECT {} FROM questions WHERE NOT (id = ANY($1)) ORDER BY id",
                    QUESTION_COLUMNS
                );
                sqlx::query_as::<_, Question>(&query)
                    .bind(exclude)
                    .fetch_all(&mut *conn)
                    .await?
            }
            Some(category) => {
                let query = format!(
                    "SELECT {} FROM questions
                     WHERE category = $1 AND NOT (id = ANY($2))
                     ORDER BY id",
                    QUESTION_COLUMNS
                );
                sqlx::query_as::<_, Question>(&query)
                    .bind(category)
                    .bind(exclude)
                    .fetch_all(&mut *conn)
                    .await?
            }
        };
        Ok(items)
    }
}
