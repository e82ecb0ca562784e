use axum::{
    extract::State,
    response::{IntoResponse, Json},
};
use tracing::info;

use crate::{
    dto::quiz_dto::QuizSubmission, error::Result, services::scoring_service::ScoringService,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/quiz/submit",
    request_body = QuizSubmission,
    responses(
        (status = 200, description = "Submission scored"),
        (status = 400, description = "Invalid submission")
    )
)]
#[axum::debug_handler]
pub async fn submit_quiz(
    State(state): State<AppState>,
    Json(submission): Json<QuizSubmission>,
) -> Result<impl IntoResponse> {
    let questions = state.question_store.fetch_all().await?;
    let report = ScoringService::score(&submission, &questions)?;
    info!(
        score = report.score,
        total = report.total,
        passed = report.passed,
        "quiz submission scored"
    );
    Ok(Json(report))
}
