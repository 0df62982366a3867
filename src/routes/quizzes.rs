use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{
    dto::trivia_dto::{QuizPayload, QuizResponse},
    error::Result,
    utils::extract::ApiJson,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/quizzes",
    request_body = QuizPayload,
    responses(
        (status = 200, description = "Next question, or null when none are left", body = QuizResponse),
        (status = 422, description = "quiz_category or previous_questions is missing")
    )
)]
#[axum::debug_handler]
pub async fn play_quiz(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<QuizPayload>,
) -> Result<impl IntoResponse> {
    let question = state.trivia_service.next_quiz_question(payload).await?;
    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
