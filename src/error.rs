/*
 * Responsibility
 * - HTTP-facing AppError
 * - IntoResponse (status + flat `{"error": "..."}` body)
 * - Conversion from verification / config errors without leaking library internals
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::VerifyError;

pub const MISSING_CREDENTIALS: &str = "Missing or malformed Authorization token.";
pub const MISSING_TOKEN: &str = "Missing token.";
pub const REVOKED_TOKEN: &str = "Token blacklisted.";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    // No usable credential was presented
    #[error("{0}")]
    Unauthorized(String),

    // A credential was presented and rejected
    #[error("{0}")]
    Forbidden(String),

    #[error("Only POST is allowed.")]
    MethodNotAllowed,

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn missing_credentials() -> Self {
        Self::Unauthorized(MISSING_CREDENTIALS.to_string())
    }

    pub fn missing_token() -> Self {
        Self::BadRequest(MISSING_TOKEN.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<VerifyError> for AppError {
    fn from(e: VerifyError) -> Self {
        // Only the client-safe message crosses the HTTP boundary
        AppError::Forbidden(e.message)
    }
}

impl From<ConfigError> for AppError {
    fn from(_: ConfigError) -> Self {
        AppError::Internal
    }
}
