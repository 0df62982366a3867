mod common;

use axum::http::StatusCode;
use common::{assert_error, empty_app, seeded_app, CATEGORIES};

#[tokio::test]
async fn lists_categories_in_id_order() {
    let app = seeded_app().await;

    let (status, body) = app.get("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["caregory_num"], CATEGORIES.len());

    let categories = body["categories"].as_array().unwrap();
    for (idx, category) in categories.iter().enumerate() {
        assert_eq!(category["id"], idx + 1);
        assert_eq!(category["type"], CATEGORIES[idx]);
    }
}

#[tokio::test]
async fn empty_category_table_is_not_found() {
    let app = empty_app();

    let (status, body) = app.get("/api/categories").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn questions_by_category_echo_the_category() {
    let app = seeded_app().await;

    let (status, body) = app.get("/categories/1/questions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["total_questions"], 5);
    assert_eq!(body["current_category"], 1);
    assert_eq!(body["categories"]["id"], 1);
    assert_eq!(body["categories"]["type"], "Science");

    let questions = body["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    assert!(questions.iter().all(|q| q["category"] == "1"));
}

#[tokio::test]
async fn category_without_questions_is_still_found() {
    let app = seeded_app().await;
    let extra = app.store.add_category("Music").await;

    let (status, body) = app
        .get(&format!("/categories/{}/questions", extra.id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["categories"]["type"], "Music");
}

#[tokio::test]
async fn unknown_or_malformed_category_is_not_found() {
    let app = seeded_app().await;

    let (status, body) = app.get("/categories/99/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");

    let (status, body) = app.get("/categories/a/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}

#[tokio::test]
async fn by_category_route_has_no_api_prefix() {
    let app = seeded_app().await;

    let (status, body) = app.get("/api/categories/1/questions").await;
    assert_error(status, &body, StatusCode::NOT_FOUND, "resource not found");
}
