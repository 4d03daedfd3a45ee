use axum::http::{HeaderMap, header};

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// The scheme is case-sensitive and followed by exactly one space; everything after
/// it is the token. Returns `None` for a missing header, a non-ASCII value, another
/// scheme, or an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    if token.is_empty() { None } else { Some(token) }
}
