use axum::{extract::State, routing::post, Json, Router};
use time::{Duration, OffsetDateTime};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::extract::ApiJson;
use crate::core::state::AppState;
use crate::core::time::millis_id;
use crate::repositories;
use crate::schemas::auth::{
    ChangePasswordRequest, CodeRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
    VerifiedBody, REGISTRATION_CODE_TYPE,
};
use crate::schemas::user::{avatar_url, default_mode, student_id_for, UserBody, UserResponse};
use crate::schemas::{ack, Ack, Success};

/// Lifetime of a stored verification code.
const CODE_TTL: Duration = Duration::minutes(10);

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/register", post(register))
        .route("/change-password", post(change_password))
        .route("/store-code", post(store_code))
        .route("/verify-code", post(verify_code))
        .route("/reset-password", post(reset_password))
}

async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<Success<UserBody>>, ApiError> {
    let user =
        repositories::users::find_by_credentials(state.db(), &payload.email, &payload.password)
            .await
            .map_err(|e| ApiError::internal(e, "Login failed"))?
            .ok_or(ApiError::Unauthorized("Invalid credentials"))?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(Success::new(UserBody { user: Some(UserResponse::from_db(user)) })))
}

async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Result<Json<Success<UserBody>>, ApiError> {
    payload.validate()?;

    let exists = repositories::users::exists_by_email(state.db(), &payload.email)
        .await
        .map_err(|e| ApiError::internal(e, "Registration failed"))?;
    if exists {
        return Err(ApiError::Conflict("User already exists"));
    }

    let id = millis_id();
    let student_id = student_id_for(&id);
    let avatar = avatar_url(&payload.name);
    let user = repositories::users::create(
        state.db(),
        repositories::users::CreateUser {
            id: &id,
            name: &payload.name,
            email: &payload.email,
            password: &payload.password,
            avatar: &avatar,
            student_id: &student_id,
            mode: default_mode(),
        },
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            ApiError::Conflict("User already exists")
        } else {
            ApiError::internal(e, "Registration failed")
        }
    })?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok(Json(Success::new(UserBody { user: Some(UserResponse::from_db(user)) })))
}

async fn change_password(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ChangePasswordRequest>,
) -> Result<Json<Success<Ack>>, ApiError> {
    let matches = repositories::users::password_matches(
        state.db(),
        &payload.email,
        &payload.current_password,
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to change password"))?;
    if !matches {
        return Err(ApiError::Unauthorized("Current password is incorrect"));
    }

    repositories::users::update_password(state.db(), &payload.email, &payload.new_password)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to change password"))?;

    Ok(Json(ack()))
}

async fn store_code(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CodeRequest>,
) -> Result<Json<Success<Ack>>, ApiError> {
    payload.validate()?;

    let replaced =
        repositories::verification_codes::delete_for(state.db(), &payload.email, &payload.kind)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to store verification code"))?;

    repositories::verification_codes::create(
        state.db(),
        repositories::verification_codes::CreateCode {
            email: &payload.email,
            code: &payload.code,
            kind: &payload.kind,
            expires_at: OffsetDateTime::now_utc() + CODE_TTL,
        },
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to store verification code"))?;

    tracing::debug!(kind = %payload.kind, replaced, "Verification code stored");
    Ok(Json(ack()))
}

async fn verify_code(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CodeRequest>,
) -> Result<Json<Success<VerifiedBody>>, ApiError> {
    payload.validate()?;

    let consumed = repositories::verification_codes::consume(
        state.db(),
        &payload.email,
        &payload.code,
        &payload.kind,
        OffsetDateTime::now_utc(),
    )
    .await
    .map_err(|e| ApiError::internal(e, "Failed to verify code"))?
    .ok_or_else(|| ApiError::BadRequest("Invalid or expired code".to_string()))?;

    if consumed.kind == REGISTRATION_CODE_TYPE {
        repositories::users::mark_verified(state.db(), &payload.email)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to verify code"))?;
    }

    tracing::info!(code_id = consumed.id, kind = %consumed.kind, "Verification code consumed");
    Ok(Json(Success::new(VerifiedBody { verified: true })))
}

async fn reset_password(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ResetPasswordRequest>,
) -> Result<Json<Success<Ack>>, ApiError> {
    let updated =
        repositories::users::update_password(state.db(), &payload.email, &payload.new_password)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to reset password"))?;
    if updated == 0 {
        return Err(ApiError::NotFound("User not found"));
    }

    repositories::verification_codes::delete_all_for_email(state.db(), &payload.email)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to reset password"))?;

    Ok(Json(ack()))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
mod tests;
