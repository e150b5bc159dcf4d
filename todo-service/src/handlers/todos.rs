use crate::dtos::{CreateTodoRequest, SuccessResponse, TodoListResponse, TodoResponse};
use crate::models::{parse_todo_id, Todo, TodoError};
use crate::services::record_todo_operation;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

#[tracing::instrument(skip(state))]
pub async fn list_todos(
    State(state): State<AppState>,
) -> Result<Json<TodoListResponse>, AppError> {
    let todos = state.store.list().await?;
    record_todo_operation("list");

    Ok(Json(TodoListResponse {
        data: todos.into_iter().map(TodoResponse::from).collect(),
    }))
}

/// An unparsable body is a handler failure (500), not a validation error.
#[tracing::instrument(skip(state, payload))]
pub async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<TodoResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::InternalError(anyhow::anyhow!(
            "Failed to parse todo body: {}",
            rejection.body_text()
        ))
    })?;
    payload.validate().map_err(|_| TodoError::MissingData)?;

    let todo = state.store.insert(Todo::from(payload)).await?;
    record_todo_operation("create");
    tracing::info!(todo_id = ?todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// Sets `isCompleted`; an id that matches nothing still reports success.
#[tracing::instrument(skip(state))]
pub async fn complete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let todo_id = parse_todo_id(&id)?;

    let matched = state.store.mark_completed(todo_id).await?;
    record_todo_operation("complete");
    if matched == 0 {
        tracing::debug!(todo_id = %todo_id, "Complete matched no todo");
    }

    Ok(Json(SuccessResponse::ok()))
}

#[tracing::instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, AppError> {
    let todo_id = parse_todo_id(&id)?;

    let deleted = state.store.delete(todo_id).await?;
    record_todo_operation("delete");
    if deleted == 0 {
        tracing::debug!(todo_id = %todo_id, "Delete matched no todo");
    }

    Ok(Json(SuccessResponse::ok()))
}
