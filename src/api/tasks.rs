use axum::{
    extract::{Path, State},
    routing::{get, patch, put},
    Json, Router,
};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::core::state::AppState;
use crate::core::time::millis_id;
use crate::repositories;
use crate::schemas::task::{TaskBody, TaskCreate, TaskList, TaskPatch, TaskResponse};
use crate::schemas::{ack, Ack, MessageBody, Success};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tasks).post(create_task).delete(delete_all_tasks))
        .route("/:id", put(update_task).delete(delete_task))
        .route("/:id/toggle", patch(toggle_task))
}

async fn list_tasks(State(state): State<AppState>) -> Result<Json<Success<TaskList>>, ApiError> {
    let tasks = repositories::tasks::list(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to get tasks"))?;

    Ok(Json(Success::new(TaskList {
        tasks: tasks.into_iter().map(TaskResponse::from_db).collect(),
    })))
}

async fn create_task(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TaskCreate>,
) -> Result<Json<Success<TaskBody>>, ApiError> {
    payload.validate()?;

    let id = millis_id();
    let task = repositories::tasks::create(
        state.db(),
        repositories::tasks::CreateTask {
            id: &id,
            title: &payload.title,
            course: payload.course_or_default(),
            priority: payload.priority.unwrap_or_default().as_str(),
            description: payload.description.as_deref().unwrap_or(""),
            user_id: payload.user_id(),
            due_date: payload.due_date,
            notification_id: payload.notification_id(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to add task"))?;

    tracing::info!(task_id = %task.id, "Task created");
    Ok(Json(Success::new(TaskBody { task: TaskResponse::from_db(task) })))
}

async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<TaskPatch>,
) -> Result<Json<Success<TaskBody>>, ApiError> {
    patch.validate()?;

    let mut task = repositories::tasks::find_by_id(state.db(), &id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to update task"))?
        .ok_or(ApiError::NotFound("Task not found"))?;

    patch.apply(&mut task);

    // The row can vanish between the read and the write.
    let task = repositories::tasks::update(state.db(), &task)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to update task"))?
        .ok_or(ApiError::NotFound("Task not found"))?;

    Ok(Json(Success::new(TaskBody { task: TaskResponse::from_db(task) })))
}

async fn toggle_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Success<TaskBody>>, ApiError> {
    let task = repositories::tasks::toggle(state.db(), &id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to toggle task"))?
        .ok_or(ApiError::NotFound("Task not found"))?;

    Ok(Json(Success::new(TaskBody { task: TaskResponse::from_db(task) })))
}

async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Success<Ack>>, ApiError> {
    let deleted = repositories::tasks::delete(state.db(), &id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete task"))?;

    tracing::debug!(task_id = %id, deleted, "Task delete");
    Ok(Json(ack()))
}

async fn delete_all_tasks(
    State(state): State<AppState>,
) -> Result<Json<Success<MessageBody>>, ApiError> {
    let deleted = repositories::tasks::delete_all(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete tasks"))?;

    tracing::warn!(deleted, "All tasks deleted");
    Ok(Json(Success::new(MessageBody { message: "All tasks deleted" })))
}
