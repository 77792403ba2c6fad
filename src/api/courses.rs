use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::api::errors::ApiError;
use crate::core::state::AppState;
use crate::repositories;
use crate::schemas::course::{CourseBody, CourseList, CourseResponse};
use crate::schemas::Success;

pub(crate) fn router() -> Router<AppState> {
    Router::new().route("/", get(list_courses)).route("/:id", get(get_course))
}

async fn list_courses(
    State(state): State<AppState>,
) -> Result<Json<Success<CourseList>>, ApiError> {
    let courses = repositories::courses::list(state.db())
        .await
        .map_err(|e| ApiError::internal(e, "Failed to get courses"))?;

    Ok(Json(Success::new(CourseList {
        courses: courses.into_iter().map(CourseResponse::from_db).collect(),
    })))
}

async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Success<CourseBody>>, ApiError> {
    let course = repositories::courses::find_by_id(state.db(), &id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to get course"))?
        .ok_or(ApiError::NotFound("Course not found"))?;

    Ok(Json(Success::new(CourseBody { course: CourseResponse::from_db(course) })))
}
