use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::RwLock;

use crate::dto::question_dto::{CreateQuestionPayload, UpdateQuestionPayload};
use crate::error::{Error, Result};
use crate::models::question::Question;

/// Read/write access to the question set. The scoring path only needs the
/// fetch side; create/update/delete are plain CRUD.
///
/// Two implementations exist: [`PgQuestionStore`] for production and
/// [`InMemoryQuestionStore`] as a fixture for tests. Callers must not care
/// which one backs the trait object.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All questions, ordered by ascending id.
    async fn fetch_all(&self) -> Result<Vec<Question>>;

    /// A single question, or `None` when no row matches. Absence is not an
    /// error.
    async fn fetch_by_id(&self, id: i32) -> Result<Option<Question>>;

    /// Questions in the given category, ordered by ascending id.
    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Question>>;

    async fn create(&self, payload: CreateQuestionPayload) -> Result<Question>;

    async fn update(&self, id: i32, payload: UpdateQuestionPayload) -> Result<Question>;

    async fn delete(&self, id: i32) -> Result<()>;
}

fn check_answer_index(answer: i32, options_len: usize) -> Result<()> {
    if answer < 0 || answer as usize >= options_len {
        return Err(Error::BadRequest(format!(
            "Correct answer index {} is out of range for {} options",
            answer, options_len
        )));
    }
    Ok(())
}

#[derive(Clone)]
pub struct PgQuestionStore {
    pool: PgPool,
}

impl PgQuestionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionStore for PgQuestionStore {
    async fn fetch_all(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, text, options, answer, category, created_at, updated_at
            FROM questions
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn fetch_by_id(&self, id: i32) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, text, options, answer, category, created_at, updated_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, text, options, answer, category, created_at, updated_at
            FROM questions
            WHERE category = $1
            ORDER BY id ASC
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    async fn create(&self, payload: CreateQuestionPayload) -> Result<Question> {
        check_answer_index(payload.answer, payload.options.len())?;

        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (text, options, answer, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, text, options, answer, category, created_at, updated_at
            "#,
        )
        .bind(&payload.text)
        .bind(Json(&payload.options))
        .bind(payload.answer)
        .bind(&payload.category)
        .fetch_one(&self.pool)
        .await?;

        Ok(question)
    }

    async fn update(&self, id: i32, payload: UpdateQuestionPayload) -> Result<Question> {
        check_answer_index(payload.answer, payload.options.len())?;

        let question = sqlx::query_as::<_, Question>(
            r#"
            UPDATE questions
            SET text = $2, options = $3, answer = $4, category = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, text, options, answer, category, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&payload.text)
        .bind(Json(&payload.options))
        .bind(payload.answer)
        .bind(&payload.category)
        .fetch_optional(&self.pool)
        .await?;

        question.ok_or_else(|| Error::NotFound(format!("Question with ID {} does not exist", id)))
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!(
                "Question with ID {} does not exist",
                id
            )));
        }
        Ok(())
    }
}

/// In-memory question store, used as a fixture in tests.
#[derive(Default)]
pub struct InMemoryQuestionStore {
    questions: RwLock<Vec<Question>>,
}

impl InMemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: RwLock::new(questions),
        }
    }
}

#[async_trait]
impl QuestionStore for InMemoryQuestionStore {
    async fn fetch_all(&self) -> Result<Vec<Question>> {
        let mut questions = self.questions.read().await.clone();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn fetch_by_id(&self, id: i32) -> Result<Option<Question>> {
        let questions = self.questions.read().await;
        Ok(questions.iter().find(|q| q.id == id).cloned())
    }

    async fn fetch_by_category(&self, category: &str) -> Result<Vec<Question>> {
        let questions = self.questions.read().await;
        let mut matching: Vec<Question> = questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect();
        matching.sort_by_key(|q| q.id);
        Ok(matching)
    }

    async fn create(&self, payload: CreateQuestionPayload) -> Result<Question> {
        check_answer_index(payload.answer, payload.options.len())?;

        let mut questions = self.questions.write().await;
        let id = questions.iter().map(|q| q.id).max().unwrap_or(0) + 1;
        let now = Utc::now();
        let question = Question {
            id,
            text: payload.text,
            options: Json(payload.options),
            answer: payload.answer,
            category: payload.category,
            created_at: now,
            updated_at: now,
        };
        questions.push(question.clone());
        Ok(question)
    }

    async fn update(&self, id: i32, payload: UpdateQuestionPayload) -> Result<Question> {
        check_answer_index(payload.answer, payload.options.len())?;

        let mut questions = self.questions.write().await;
        let question = questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| Error::NotFound(format!("Question with ID {} does not exist", id)))?;

        question.text = payload.text;
        question.options = Json(payload.options);
        question.answer = payload.answer;
        question.category = payload.category;
        question.updated_at = Utc::now();
        Ok(question.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| q.id != id);
        if questions.len() == before {
            return Err(Error::NotFound(format!(
                "Question with ID {} does not exist",
                id
            )));
        }
        Ok(())
    }
}
