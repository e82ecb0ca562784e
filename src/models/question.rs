use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// A quiz question. `options` is stored as JSONB; `answer` is the index of
/// the correct option and must satisfy `0 <= answer < options.len()`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub text: String,
    pub options: Json<Vec<String>>,
    pub answer: i32,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Question {
    pub fn options(&self) -> &[String] {
        &self.options.0
    }
}
