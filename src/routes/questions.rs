use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::trivia_dto::{
        CreateQuestionPayload, DeletedResponse, PageQuery, QuestionPageResponse,
        QuestionsListResponse, SearchPayload, SearchResponse,
    },
    error::{Error, Result},
    utils::{deserializers::page_or_first, extract::ApiJson},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/questions",
    params(PageQuery),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPageResponse),
        (status = 404, description = "Page is empty or out of range")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse> {
    let page = page_or_first(query.page.as_deref());
    let result = state.trivia_service.list_questions(page).await?;
    Ok(Json(QuestionPageResponse::from(result)))
}

#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 200, description = "Question created; last page of the list", body = QuestionsListResponse),
        (status = 422, description = "A required field is missing or empty")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let last_page = state.trivia_service.create_question(payload).await?;
    Ok(Json(QuestionsListResponse {
        success: true,
        questions_list: last_page,
    }))
}

#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = DeletedResponse),
        (status = 422, description = "Question does not exist")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let question_id: i32 = id
        .parse()
        .map_err(|_| Error::Unprocessable(format!("invalid question id '{}'", id)))?;
    let deleted = state.trivia_service.delete_question(question_id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}

#[utoipa::path(
    post,
    path = "/api/questions/search",
    request_body = SearchPayload,
    responses(
        (status = 200, description = "Questions whose text contains the term", body = SearchResponse),
        (status = 404, description = "Search term is blank"),
        (status = 422, description = "searchTerm is missing")
    )
)]
#[axum::debug_handler]
pub async fn search_questions(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SearchPayload>,
) -> Result<impl IntoResponse> {
    let matches = state
        .trivia_service
        .search_questions(payload.search_term)
        .await?;
    Ok(Json(SearchResponse::from(matches)))
}
