pub mod categories;
pub mod questions;
pub mod quizzes;

use axum::{
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::{
    dto::trivia_dto::{
        CategoriesResponse, CategoryQuestionsResponse, CreateQuestionPayload, DeletedResponse,
        QuestionPageResponse, QuestionsListResponse, QuizCategory, QuizPayload, QuizResponse,
        SearchPayload, SearchResponse,
    },
    error::Error,
    models::{category::Category, question::Question},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        categories::list_categories,
        categories::questions_by_category,
        questions::list_questions,
        questions::create_question,
        questions::delete_question,
        questions::search_questions,
        quizzes::play_quiz,
    ),
    components(schemas(
        Category,
        Question,
        CreateQuestionPayload,
        SearchPayload,
        QuizCategory,
        QuizPayload,
        CategoriesResponse,
        CategoryQuestionsResponse,
        DeletedResponse,
        QuestionPageResponse,
        QuestionsListResponse,
        QuizResponse,
        SearchResponse,
    ))
)]
pub struct ApiDoc;

/// The full HTTP surface. The by-category route has no `/api` prefix.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/categories", get(categories::list_categories))
        .route(
            "/categories/:id/questions",
            get(categories::questions_by_category),
        )
        .route(
            "/api/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/api/questions/search", post(questions::search_questions))
        .route("/api/questions/:id", delete(questions::delete_question))
        .route("/api/quizzes", post(quizzes::play_quiz))
        .route("/api/openapi.json", get(openapi))
        .fallback(not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

async fn not_found() -> Error {
    Error::NotFound("no such route".to_string())
}
