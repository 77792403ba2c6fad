use axum::{extract::State, routing::get, Json, Router};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::core::state::AppState;
use crate::core::time::millis_id;
use crate::repositories;
use crate::schemas::schedule::{ScheduleEventCreate, ScheduleEventResponse, ScheduleList};
use crate::schemas::{CreatedId, Success};

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_events).post(create_event))
}

async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Success<ScheduleList>>, ApiError> {
    let events = repositories::schedule::list(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to get schedule"))?;

    Ok(Json(Success::new(ScheduleList {
        events: events.into_iter().map(ScheduleEventResponse::from_db).collect(),
    })))
}

async fn create_event(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ScheduleEventCreate>,
) -> Result<Json<Success<CreatedId>>, ApiError> {
    payload.validate()?;

    let id = millis_id();
    repositories::schedule::create(
        state.db(),
        repositories::schedule::CreateEvent {
            id: &id,
            title: &payload.title,
            start_time: payload.start_time,
            end_time: payload.end_time,
            location: payload.location.as_deref(),
            instructor: payload.instructor.as_deref(),
            course_id: payload.course_id.as_deref(),
            description: payload.description.as_deref(),
            kind: payload.kind_or_default(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create schedule event"))?;

    Ok(Json(Success::new(CreatedId { id })))
}
