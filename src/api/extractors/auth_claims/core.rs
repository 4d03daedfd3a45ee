use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;

use super::AuthClaims;

/// Extractor for handlers behind the gate.
///
/// Assumes the gate already inserted `AuthClaims` into request extensions. If it is
/// missing (route not gated), answers 401 like a request without credentials.
pub struct AuthClaimsExtractor(pub AuthClaims);

impl<S> FromRequestParts<S> for AuthClaimsExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthClaims>()
            .cloned()
            .map(AuthClaimsExtractor)
            .ok_or_else(AppError::missing_credentials)
    }
}
