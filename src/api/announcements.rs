use axum::{
    extract::{Path, State},
    routing::{get, patch},
    Json, Router,
};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::core::state::AppState;
use crate::core::time::millis_id;
use crate::repositories;
use crate::schemas::announcement::{AnnouncementCreate, AnnouncementList, AnnouncementResponse};
use crate::schemas::{ack, Ack, CreatedId, Success};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_announcements).post(create_announcement))
        .route("/:id/read", patch(mark_read))
}

async fn list_announcements(
    State(state): State<AppState>,
) -> Result<Json<Success<AnnouncementList>>, ApiError> {
    let announcements = repositories::announcements::list(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to get announcements"))?;

    Ok(Json(Success::new(AnnouncementList {
        announcements: announcements.into_iter().map(AnnouncementResponse::from_db).collect(),
    })))
}

async fn create_announcement(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<AnnouncementCreate>,
) -> Result<Json<Success<CreatedId>>, ApiError> {
    payload.validate()?;

    let id = millis_id();
    repositories::announcements::create(
        state.db(),
        repositories::announcements::CreateAnnouncement {
            id: &id,
            title: &payload.title,
            message: payload.message.as_deref(),
            kind: payload.kind.unwrap_or_default().as_str(),
            course_id: payload.course_id.as_deref(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to create announcement"))?;

    Ok(Json(Success::new(CreatedId { id })))
}

/// Succeeds whether or not the id matched a row.
async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Success<Ack>>, ApiError> {
    repositories::announcements::mark_read(state.db(), &id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to mark announcement as read"))?;

    Ok(Json(ack()))
}
