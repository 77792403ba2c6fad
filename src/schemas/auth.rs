use serde::{Deserialize, Serialize};
use validator::Validate;

/// Code type whose successful verification marks the account as verified.
pub(crate) const REGISTRATION_CODE_TYPE: &str = "registration";

#[derive(Debug, Deserialize)]
pub(crate) struct LoginRequest {
    pub(crate) email: String,
    pub(crate) password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub(crate) name: String,
    #[validate(length(min = 1, max = 100, message = "email must be 1-100 characters"))]
    pub(crate) email: String,
    #[validate(length(min = 1, max = 100, message = "password must be 1-100 characters"))]
    pub(crate) password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChangePasswordRequest {
    pub(crate) email: String,
    pub(crate) current_password: String,
    pub(crate) new_password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct CodeRequest {
    pub(crate) email: String,
    #[validate(length(min = 1, max = 10, message = "code must be 1-10 characters"))]
    pub(crate) code: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 20, message = "type must be 1-20 characters"))]
    pub(crate) kind: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResetPasswordRequest {
    pub(crate) email: String,
    pub(crate) new_password: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifiedBody {
    pub(crate) verified: bool,
}
