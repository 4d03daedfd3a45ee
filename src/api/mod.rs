/*
 * Responsibility
 * - URL structure of the whole API
 *   - /health
 *   - /api/auth/{login,validate-token,logout}/
 *   - /api/protected/... (prefix-gated) and /api/profile/ (route-gated)
 */
use axum::{Router, routing::get};

use crate::state::AppState;

pub mod auth;
pub mod extractors;
pub mod health;
pub mod protected;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .nest("/api/auth", auth::routes())
        .nest("/api/protected", protected::prefix_routes())
        .merge(protected::wrapped_routes(state))
}
