use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::trivia_dto::{CategoriesResponse, CategoryQuestionsResponse},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories ordered by id", body = CategoriesResponse),
        (status = 404, description = "No categories are stored")
    )
)]
#[axum::debug_handler]
pub async fn list_categories(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let categories = state.trivia_service.list_categories().await?;
    Ok(Json(CategoriesResponse::from(categories)))
}

#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Questions in the category", body = CategoryQuestionsResponse),
        (status = 404, description = "Category not found")
    )
)]
#[axum::debug_handler]
pub async fn questions_by_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let category_id: i32 = id
        .parse()
        .map_err(|_| Error::NotFound(format!("invalid category id '{}'", id)))?;
    let result = state.trivia_service.questions_by_category(category_id).await?;
    Ok(Json(CategoryQuestionsResponse::from(result)))
}
