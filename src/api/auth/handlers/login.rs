/*
 * Responsibility
 * - POST /api/auth/login/
 * - Accept a token obtained by the frontend from the identity provider, verify it,
 *   echo its claims back
 * - No server-side session is created; the frontend keeps the token
 */
use axum::{Json, extract::State};
use tracing::info;

use crate::api::auth::dto::{responses::LoginResponse, token_request::TokenRequest};
use crate::error::AppError;
use crate::services::auth::log_rejection;
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    req: TokenRequest,
) -> Result<Json<LoginResponse>, AppError> {
    let token = req.token.ok_or_else(AppError::missing_token)?;

    let claims = state.verifier.verify(&token).map_err(|err| {
        log_rejection(&err, &token, "login");
        AppError::from(err)
    })?;

    info!(sub = ?claims.subject(), "login token accepted");

    Ok(Json(LoginResponse {
        success: true,
        claims,
    }))
}
