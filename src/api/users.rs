use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::user::{UserBody, UserResponse, UserUpdate};
use crate::schemas::{MessageBody, Success};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/", delete(delete_all_users))
        .route("/:email", get(get_user).put(update_user))
}

async fn get_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Success<UserBody>>, ApiError> {
    let user = repositories::users::find_by_email(state.db(), &email)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to get user"))?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(Json(Success::new(UserBody { user: Some(UserResponse::from_db(user)) })))
}

/// Replaces the profile fields wholesale; only `program` survives when omitted.
async fn update_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    ApiJson(payload): ApiJson<UserUpdate>,
) -> Result<Json<Success<UserBody>>, ApiError> {
    payload.validate()?;

    let updated = repositories::users::update_profile(
        state.db(),
        &email,
        repositories::users::UpdateProfile {
            name: payload.name,
            avatar: payload.avatar,
            major: payload.major,
            department: payload.department,
            program: payload.program,
            gpa: payload.gpa,
            level: payload.level,
            mode: payload.mode,
            is_onboarding_complete: payload.is_onboarding_complete.unwrap_or(false),
            enrolled_courses: payload.enrolled_courses.unwrap_or_default(),
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to update user"))?;
    tracing::debug!(updated, "User profile written");

    let user = repositories::users::find_by_email(state.db(), &email)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to update user"))?;

    Ok(Json(Success::new(UserBody { user: user.map(UserResponse::from_db) })))
}

async fn delete_all_users(
    State(state): State<AppState>,
) -> Result<Json<Success<MessageBody>>, ApiError> {
    let deleted = repositories::users::delete_all(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to delete users"))?;

    tracing::warn!(deleted, "All users deleted");
    Ok(Json(Success::new(MessageBody { message: "All users deleted" })))
}
