#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use trivia_api::{
    database::{MemoryTriviaStore, TriviaStore},
    models::question::NewQuestion,
    routes, AppState,
};

pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

// (question, answer, category, difficulty)
pub const QUESTIONS: [(&str, &str, i32, i32); 22] = [
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 4, 1),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("Which American artist was a pioneer of Abstract Expressionism and a leading exponent of action painting?", "Jackson Pollock", 2, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("What is the chemical symbol for gold?", "Au", 1, 1),
    ("Which planet is known as the Red Planet?", "Mars", 1, 1),
    ("Which country hosted the 2016 Summer Olympics?", "Brazil", 6, 2),
];

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryTriviaStore>,
}

pub fn empty_app() -> TestApp {
    let store = Arc::new(MemoryTriviaStore::new());
    let router = routes::router(AppState::new(store.clone()));
    TestApp { router, store }
}

pub async fn seeded_app() -> TestApp {
    let app = empty_app();
    for kind in CATEGORIES {
        app.store.add_category(kind).await;
    }
    for (question, answer, category, difficulty) in QUESTIONS {
        app.store
            .insert_question(&NewQuestion {
                question: question.to_string(),
                answer: answer.to_string(),
                category: category.to_string(),
                difficulty,
            })
            .await
            .expect("seed question");
    }
    app
}

impl TestApp {
    pub async fn question_count(&self) -> i64 {
        self.store.count_questions().await.expect("count")
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, JsonValue) {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, JsonValue) {
        let req = Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(req).await
    }

    pub async fn post_json(&self, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
        self.post_raw(uri, "application/json", &body.to_string()).await
    }

    pub async fn post_raw(
        &self,
        uri: &str,
        content_type: &str,
        body: &str,
    ) -> (StatusCode, JsonValue) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", content_type)
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, JsonValue) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let body = if bytes.is_empty() {
            JsonValue::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }
}

pub fn assert_error(status: StatusCode, body: &JsonValue, expected: StatusCode, message: &str) {
    assert_eq!(status, expected);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], expected.as_u16());
    assert_eq!(body["message"], message);
}
