use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted per-question attempt record. The scoring endpoint does not
/// write these; they back the (out of scope) attempt-history surface.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuizResult {
    pub id: i32,
    pub user_id: String,
    pub question_id: i32,
    pub user_answer: i32,
    pub is_correct: bool,
    pub submitted_at: DateTime<Utc>,
}

/// A persisted quiz session. Unused by the scoring path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuizSession {
    pub id: i32,
    pub user_id: String,
    pub score: i32,
    pub total_questions: i32,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}
