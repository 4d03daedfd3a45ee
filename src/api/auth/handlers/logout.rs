/*
 * Responsibility
 * - POST /api/auth/logout/
 * - Stateless: the client discards its token. A token sent along (body or bearer
 *   header) is handed to the revocation seam, which is a no-op by default.
 */
use axum::{Json, extract::State, http::HeaderMap};
use tracing::{info, warn};

use crate::api::auth::dto::{responses::LogoutResponse, token_request::TokenRequest};
use crate::middleware::auth::bearer::extract_bearer_token;
use crate::services::auth::token_fingerprint;
use crate::state::AppState;

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    req: TokenRequest,
) -> Json<LogoutResponse> {
    let token = req
        .token
        .or_else(|| extract_bearer_token(&headers).map(str::to_owned));

    if let Some(token) = token {
        // Logout always succeeds for the client, even if revocation could not be recorded
        if let Err(err) = state.revocation.revoke(&token).await {
            warn!(error = %err, token = %token_fingerprint(&token), "failed to record revocation");
        } else {
            info!(token = %token_fingerprint(&token), "logout");
        }
    }

    Json(LogoutResponse { success: true })
}
