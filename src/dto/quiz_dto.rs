use serde::{Deserialize, Serialize};
use validator::Validate;

/// One answer in a submission, keyed by question id. Wire names are
/// camelCase for compatibility with existing clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAnswer {
    #[serde(rename = "questionId")]
    pub question_id: i32,
    pub answer: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuizSubmission {
    pub answers: Vec<QuizAnswer>,
}

/// Per-question outcome, in submission order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    #[serde(rename = "questionId")]
    pub question_id: i32,
    #[serde(rename = "userAnswer")]
    pub user_answer: i32,
    #[serde(rename = "correctAnswer")]
    pub correct_answer: i32,
    #[serde(rename = "isCorrect")]
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub score: i32,
    pub total: i32,
    pub percentage: f64,
    pub passed: bool,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub results: Vec<AnswerResult>,
}
