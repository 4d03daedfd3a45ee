/*
 * Responsibility
 * - Routes that need a verified token
 *   - /api/protected/...: gated by path prefix (router-wide gate)
 *   - /api/profile/:    gated by the single-route wrapper
 * - Handlers read claims through `AuthClaimsExtractor` and never see raw tokens
 */
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::api::extractors::AuthClaimsExtractor;
use crate::middleware::auth::gate;
use crate::state::AppState;

pub async fn whoami(AuthClaimsExtractor(auth): AuthClaimsExtractor) -> Json<Value> {
    Json(json!({
        "sub": auth.subject(),
        "claims": auth.claims(),
    }))
}

pub async fn profile(AuthClaimsExtractor(auth): AuthClaimsExtractor) -> Json<Value> {
    let claims = auth.claims();
    Json(json!({
        "sub": claims.subject(),
        "email": claims.get_str("email"),
        "roles": claims.get("roles").cloned().unwrap_or_else(|| json!([])),
    }))
}

/// Mounted under `/api/protected`; the prefix gate covers everything here.
pub fn prefix_routes() -> Router<AppState> {
    Router::new().route("/whoami/", get(whoami))
}

/// Merged at the root; each route carries its own gate.
pub fn wrapped_routes(state: AppState) -> Router<AppState> {
    Router::new().route("/api/profile/", gate::required(get(profile), state))
}
