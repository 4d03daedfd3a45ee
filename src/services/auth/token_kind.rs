//! Token-type discrimination seam.
//!
//! Once refresh tokens are issued, protected resources must refuse them. A policy
//! reading a type claim (`token_use`, `typ`, ...) goes here; the default accepts
//! every verified token.
use crate::services::auth::claims::ClaimSet;

/// Rejection message returned to the client (403).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenKindRejected(pub String);

pub trait TokenKindPolicy: Send + Sync {
    fn check(&self, claims: &ClaimSet) -> Result<(), TokenKindRejected>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllTokenKinds;

impl TokenKindPolicy for AcceptAllTokenKinds {
    fn check(&self, _claims: &ClaimSet) -> Result<(), TokenKindRejected> {
        Ok(())
    }
}
