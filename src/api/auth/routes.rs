use axum::{Router, routing::post};

use crate::api::auth::handlers::{
    login::login, logout::logout, only_post, validate::validate_token,
};
use crate::state::AppState;

/// Mounted under `/api/auth`. Trailing slashes are part of the public paths.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login/", post(login).fallback(only_post))
        .route("/validate-token/", post(validate_token).fallback(only_post))
        .route("/logout/", post(logout).fallback(only_post))
}
