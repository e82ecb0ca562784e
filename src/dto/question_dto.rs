use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestionPayload {
    #[validate(length(min = 1, message = "Question text must not be empty"))]
    pub text: String,
    #[validate(length(min = 2, message = "A question needs at least two options"))]
    pub options: Vec<String>,
    pub answer: i32,
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateQuestionPayload {
    #[validate(length(min = 1, message = "Question text must not be empty"))]
    pub text: String,
    #[validate(length(min = 2, message = "A question needs at least two options"))]
    pub options: Vec<String>,
    pub answer: i32,
    #[validate(length(min = 1, message = "Category must not be empty"))]
    pub category: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuestionListQuery {
    pub category: Option<String>,
}
