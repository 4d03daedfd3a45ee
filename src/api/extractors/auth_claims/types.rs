/*
 * Responsibility
 * - The "verified request" contract between the gate and handlers
 * - The gate inserts it into request extensions; handlers only ever see this type
 */
use crate::services::auth::ClaimSet;

/// Claims of the token that authorized the current request.
///
/// Lives for one request only; never cached.
#[derive(Debug, Clone)]
pub struct AuthClaims(pub ClaimSet);

impl AuthClaims {
    pub fn claims(&self) -> &ClaimSet {
        &self.0
    }

    pub fn subject(&self) -> Option<&str> {
        self.0.subject()
    }
}
