/*
 * Responsibility
 * - POST /api/auth/validate-token/
 * - Report whether a token is currently acceptable; 403 bodies keep `valid: false`
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::api::auth::dto::{responses::ValidateResponse, token_request::TokenRequest};
use crate::error::AppError;
use crate::services::auth::log_rejection;
use crate::state::AppState;

pub async fn validate_token(
    State(state): State<AppState>,
    req: TokenRequest,
) -> Result<(StatusCode, Json<ValidateResponse>), AppError> {
    let token = req.token.ok_or_else(AppError::missing_token)?;

    match state.verifier.verify(&token) {
        Ok(claims) => Ok((StatusCode::OK, Json(ValidateResponse::valid(claims)))),
        Err(err) => {
            log_rejection(&err, &token, "validate");
            Ok((
                StatusCode::FORBIDDEN,
                Json(ValidateResponse::invalid(err.message)),
            ))
        }
    }
}
