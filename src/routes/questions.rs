use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::question_dto::{CreateQuestionPayload, QuestionListQuery, UpdateQuestionPayload},
    error::{Error, Result},
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/questions",
    params(
        ("category" = Option<String>, Query, description = "Filter by category")
    ),
    responses(
        (status = 200, description = "List of questions")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<QuestionListQuery>,
) -> Result<impl IntoResponse> {
    let questions = match query.category {
        Some(category) => state.question_store.fetch_by_category(&category).await?,
        None => state.question_store.fetch_all().await?,
    };
    Ok(Json(questions))
}

#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let question = state
        .question_store
        .fetch_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Question with ID {} does not exist", id)))?;
    Ok(Json(question))
}

#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Question created successfully"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.question_store.create(payload).await?;
    Ok((StatusCode::CREATED, Json(question)))
}

#[utoipa::path(
    put,
    path = "/api/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionPayload,
    responses(
        (status = 200, description = "Question updated successfully"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let question = state.question_store.update(id, payload).await?;
    Ok(Json(question))
}

#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 204, description = "Question deleted successfully"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    state.question_store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
