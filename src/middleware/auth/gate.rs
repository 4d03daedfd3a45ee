//! Bearer-token gate: verify → attach `AuthClaims` to extensions, or short-circuit.
//!
//! Two entry points share `authorize`:
//! - `apply`: router-wide layer, only gates paths under `AppState::protected_prefix`
//! - `required`: wraps a single route regardless of its path
//!
//! Outcomes per request:
//! - path not protected        → passed through, no verification
//! - no/malformed credential   → 401
//! - revoked token             → 401
//! - verification failure      → 403
//! - refused token kind        → 403
//! - otherwise                 → claims attached, downstream response returned as-is

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};
use tracing::warn;

use crate::api::extractors::AuthClaims;
use crate::error::{AppError, REVOKED_TOKEN};
use crate::middleware::auth::bearer::extract_bearer_token;
use crate::services::auth::{ClaimSet, TokenKindRejected, log_rejection, token_fingerprint};
use crate::state::AppState;

/// Gate every route of `router` whose path starts with the protected prefix.
///
/// Apply after all routes are registered:
/// ```ignore
/// let app = Router::new().nest("/api", api).with_state(state.clone());
/// let app = middleware::auth::gate::apply(app, state);
/// ```
pub fn apply(router: Router, state: AppState) -> Router {
    router.layer(middleware::from_fn_with_state(state, prefix_gate))
}

/// Gate a single route, independent of the protected prefix.
///
/// ```ignore
/// .route("/profile/", gate::required(get(profile), state.clone()))
/// ```
pub fn required(route: MethodRouter<AppState>, state: AppState) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(state, route_gate))
}

async fn prefix_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    if !state.is_protected(req.uri().path()) {
        return Ok(next.run(req).await);
    }
    authorize(&state, req, next).await
}

async fn route_gate(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, req, next).await
}

async fn authorize(state: &AppState, req: Request<Body>, next: Next) -> Result<Response, AppError> {
    // Body is not Sync; only the parts are borrowed across the revocation await
    let (mut parts, body) = req.into_parts();
    let claims = check_credentials(state, &parts.headers).await?;

    // middleware → extractor
    parts.extensions.insert(AuthClaims(claims));

    Ok(next.run(Request::from_parts(parts, body)).await)
}

async fn check_credentials(state: &AppState, headers: &HeaderMap) -> Result<ClaimSet, AppError> {
    let token = extract_bearer_token(headers).ok_or_else(AppError::missing_credentials)?;

    let claims = state.verifier.verify(token).map_err(|err| {
        log_rejection(&err, token, "gate");
        AppError::from(err)
    })?;

    match state.revocation.is_revoked(token, &claims).await {
        Ok(false) => {}
        Ok(true) => {
            warn!(token = %token_fingerprint(token), "revoked token presented");
            return Err(AppError::Unauthorized(REVOKED_TOKEN.to_string()));
        }
        Err(err) => {
            // fail closed
            warn!(error = %err, token = %token_fingerprint(token), "revocation lookup failed");
            return Err(AppError::Unauthorized(REVOKED_TOKEN.to_string()));
        }
    }

    state
        .token_kind
        .check(&claims)
        .map_err(|TokenKindRejected(message)| {
            warn!(token = %token_fingerprint(token), %message, "token kind refused");
            AppError::Forbidden(message)
        })?;

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::http::{HeaderValue, StatusCode, header};

    use super::*;
    use crate::services::auth::test_keys::{mint, standard_claims, trusted_config, trusted_keys};
    use crate::services::auth::{RevocationChecker, RevocationError, TokenKindPolicy, Verifier};

    fn state() -> AppState {
        AppState::new(Arc::new(Verifier::new(trusted_config())))
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {token}")).expect("header"),
        );
        headers
    }

    struct DenyAll;

    #[async_trait]
    impl RevocationChecker for DenyAll {
        async fn is_revoked(&self, _: &str, _: &ClaimSet) -> Result<bool, RevocationError> {
            Ok(true)
        }
        async fn revoke(&self, _: &str) -> Result<(), RevocationError> {
            Ok(())
        }
    }

    struct Broken;

    #[async_trait]
    impl RevocationChecker for Broken {
        async fn is_revoked(&self, _: &str, _: &ClaimSet) -> Result<bool, RevocationError> {
            Err(RevocationError::Backend("connection refused".into()))
        }
        async fn revoke(&self, _: &str) -> Result<(), RevocationError> {
            Ok(())
        }
    }

    struct RefuseRefresh;

    impl TokenKindPolicy for RefuseRefresh {
        fn check(&self, claims: &ClaimSet) -> Result<(), TokenKindRejected> {
            match claims.get_str("token_use") {
                Some("refresh") => Err(TokenKindRejected(
                    "Refresh tokens cannot access this resource.".into(),
                )),
                _ => Ok(()),
            }
        }
    }

    #[tokio::test]
    async fn valid_token_yields_claims() {
        let token = mint(trusted_keys(), &standard_claims());
        let claims = check_credentials(&state(), &bearer(&token))
            .await
            .expect("authorized");
        assert_eq!(claims.subject(), Some("user-42"));
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let err = check_credentials(&state(), &HeaderMap::new())
            .await
            .expect_err("no header");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Missing or malformed Authorization token.");
    }

    #[tokio::test]
    async fn rejected_token_is_forbidden() {
        let err = check_credentials(&state(), &bearer("abc.def.ghi"))
            .await
            .expect_err("garbage");
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn revoked_token_is_unauthorized() {
        let token = mint(trusted_keys(), &standard_claims());
        let state = state().with_revocation(Arc::new(DenyAll));

        let err = check_credentials(&state, &bearer(&token))
            .await
            .expect_err("revoked");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.to_string(), "Token blacklisted.");
    }

    #[tokio::test]
    async fn revocation_backend_failure_fails_closed() {
        let token = mint(trusted_keys(), &standard_claims());
        let state = state().with_revocation(Arc::new(Broken));

        let err = check_credentials(&state, &bearer(&token))
            .await
            .expect_err("backend down");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn token_kind_policy_can_refuse_refresh_tokens() {
        let mut claims = standard_claims();
        claims["token_use"] = serde_json::json!("refresh");
        let refresh = mint(trusted_keys(), &claims);
        let access = mint(trusted_keys(), &standard_claims());
        let state = state().with_token_kind(Arc::new(RefuseRefresh));

        let err = check_credentials(&state, &bearer(&refresh))
            .await
            .expect_err("refresh refused");
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert!(check_credentials(&state, &bearer(&access)).await.is_ok());
    }
}
