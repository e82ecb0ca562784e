pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::question_store::{PgQuestionStore, QuestionStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub question_store: Arc<dyn QuestionStore>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            question_store: Arc::new(PgQuestionStore::new(pool)),
        }
    }

    /// Builds app state around an arbitrary store implementation. Tests use
    /// this with [`services::question_store::InMemoryQuestionStore`].
    pub fn with_store(store: Arc<dyn QuestionStore>) -> Self {
        Self {
            question_store: store,
        }
    }
}
