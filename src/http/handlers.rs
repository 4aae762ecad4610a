//! Request handlers for the task API.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::ApiError;
use crate::task::{
    domain::TitleInput,
    ports::TaskRepository,
    services::{TaskLifecycleService, TaskView},
};

/// Task service shared across handlers.
pub type SharedTaskService<R, C> = Arc<TaskLifecycleService<R, C>>;

/// Body returned by the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
    /// Human-readable description.
    pub message: String,
}

/// POST /api/tasks
///
/// Only `application/json` bodies are read; any other content type is
/// treated as an empty object.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for an invalid title and
/// [`ApiError::Internal`] for a malformed JSON body or a storage failure.
pub async fn create_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<TaskView>), ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    let payload = if is_json_request(&headers) {
        parse_json_body(&body)?
    } else {
        Value::Object(Map::new())
    };
    let task = service.create(TitleInput::from(payload.get("title"))).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/tasks
///
/// # Errors
///
/// Returns [`ApiError::Internal`] when storage fails.
pub async fn list_tasks<R, C>(
    State(service): State<SharedTaskService<R, C>>,
) -> Result<Json<Vec<TaskView>>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(service.list().await?))
}

/// GET /api/tasks/{id}
///
/// # Errors
///
/// Returns [`ApiError::TaskNotFound`] for unknown or malformed identifiers
/// and [`ApiError::Internal`] when storage fails.
pub async fn get_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<TaskView>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(service.get_by_id(&id).await?))
}

/// PATCH /api/tasks/{id}
///
/// Toggles completion. Any request body is ignored.
///
/// # Errors
///
/// Returns [`ApiError::TaskNotFound`] for unknown or malformed identifiers
/// and [`ApiError::Internal`] when storage fails.
pub async fn toggle_task<R, C>(
    State(service): State<SharedTaskService<R, C>>,
    Path(id): Path<String>,
) -> Result<Json<TaskView>, ApiError>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    Ok(Json(service.toggle_completion(&id).await?))
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
        message: "Task Tracker API is running".to_owned(),
    })
}

/// Fallback for unmatched routes.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Returns whether the request declares an `application/json` body.
fn is_json_request(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json"))
}

/// Parses a request body, treating an empty body as JSON `null`.
fn parse_json_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(ApiError::internal)
}
