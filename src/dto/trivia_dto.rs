use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
    quiz::QuizScope,
};
use crate::services::trivia_service::{CategoryQuestions, QuestionPage};
use crate::utils::deserializers::{deserialize_optional_i32, deserialize_truthy_i32};

/// Wire value of `quiz_category.type` meaning "any category".
pub const ANY_CATEGORY_SENTINEL: &str = "click";

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// 1-based page number; unparsable values mean page 1.
    pub page: Option<String>,
}

/// `category` and `difficulty` take a number or a numeric string; `0`, `""` and
/// `null` count as missing.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionPayload {
    #[validate(required, length(min = 1))]
    pub question: Option<String>,
    #[validate(required, length(min = 1))]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_truthy_i32")]
    #[validate(required)]
    pub category: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_truthy_i32")]
    #[validate(required)]
    pub difficulty: Option<i32>,
}

impl TryFrom<CreateQuestionPayload> for NewQuestion {
    type Error = Error;

    fn try_from(payload: CreateQuestionPayload) -> Result<Self> {
        payload.validate()?;
        match (
            payload.question,
            payload.answer,
            payload.category,
            payload.difficulty,
        ) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
                question,
                answer,
                category: category.to_string(),
                difficulty,
            }),
            _ => Err(Error::Unprocessable("incomplete question".to_string())),
        }
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SearchPayload {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizCategory {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub id: Option<i32>,
}

impl TryFrom<QuizCategory> for QuizScope {
    type Error = Error;

    fn try_from(category: QuizCategory) -> Result<Self> {
        if category.kind == ANY_CATEGORY_SENTINEL {
            return Ok(QuizScope::AnyCategory);
        }
        category
            .id
            .map(QuizScope::Category)
            .ok_or_else(|| Error::Unprocessable("quiz category without id".to_string()))
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuizPayload {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<i32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
    /// Key spelling is part of the published contract.
    pub caregory_num: usize,
}

impl From<Vec<Category>> for CategoriesResponse {
    fn from(categories: Vec<Category>) -> Self {
        Self {
            success: true,
            caregory_num: categories.len(),
            categories,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: Vec<Category>,
    pub current_category: Option<i32>,
}

impl From<QuestionPage> for QuestionPageResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total,
            categories: page.categories,
            current_category: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuestionsListResponse {
    pub success: bool,
    pub questions_list: Vec<Question>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub success: bool,
    pub questions_list: Vec<Question>,
    pub total_questions_satisfy_condition: usize,
}

impl From<Vec<Question>> for SearchResponse {
    fn from(matches: Vec<Question>) -> Self {
        Self {
            success: true,
            total_questions_satisfy_condition: matches.len(),
            questions_list: matches,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// The single requested category, not the full list.
    pub categories: Category,
    pub current_category: i32,
}

impl From<CategoryQuestions> for CategoryQuestionsResponse {
    fn from(value: CategoryQuestions) -> Self {
        Self {
            success: true,
            total_questions: value.questions.len(),
            questions: value.questions,
            current_category: value.category.id,
            categories: value.category,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(body: serde_json::Value) -> CreateQuestionPayload {
        serde_json::from_value(body).expect("payload shape")
    }

    #[test]
    fn complete_payload_becomes_new_question() {
        let new = NewQuestion::try_from(payload(json!({
            "question": "Who painted the Mona Lisa?",
            "answer": "Leonardo da Vinci",
            "category": "2",
            "difficulty": 3
        })))
        .unwrap();
        assert_eq!(new.category, "2");
        assert_eq!(new.difficulty, 3);
    }

    #[test]
    fn only_falsy_numbers_are_rejected() {
        for body in [
            json!({ "question": "q", "answer": "a", "category": 1 }),
            json!({ "question": "", "answer": "a", "category": 1, "difficulty": 1 }),
            json!({ "question": "q", "answer": "a", "category": 0, "difficulty": 1 }),
            json!({ "question": "q", "answer": "a", "category": 1, "difficulty": "" }),
        ] {
            let err = NewQuestion::try_from(payload(body)).unwrap_err();
            assert_eq!(err.status(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);
        }

        let new = NewQuestion::try_from(payload(json!({
            "question": "q",
            "answer": "a",
            "category": "0",
            "difficulty": -2
        })))
        .unwrap();
        assert_eq!(new.category, "0");
        assert_eq!(new.difficulty, -2);
    }

    #[test]
    fn click_sentinel_means_any_category() {
        let scope = QuizScope::try_from(QuizCategory {
            kind: "click".into(),
            id: None,
        })
        .unwrap();
        assert_eq!(scope, QuizScope::AnyCategory);

        let scope = QuizScope::try_from(QuizCategory {
            kind: "Science".into(),
            id: Some(1),
        })
        .unwrap();
        assert_eq!(scope, QuizScope::Category(1));

        assert!(QuizScope::try_from(QuizCategory {
            kind: "Science".into(),
            id: None,
        })
        .is_err());
    }

    #[test]
    fn categories_response_uses_published_keys() {
        let body = serde_json::to_value(CategoriesResponse::from(vec![Category {
            id: 1,
            kind: "Science".into(),
        }]))
        .unwrap();
        assert_eq!(body["caregory_num"], 1);
        assert_eq!(body["categories"][0]["type"], "Science");
    }
}
