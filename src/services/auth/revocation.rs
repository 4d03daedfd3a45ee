//! Token revocation seam.
//!
//! Nothing is stored today: `NeverRevoked` is the only implementation. A persistent
//! denylist (Valkey `SET key 1 EX <remaining exp>`, a DB table, ...) plugs in here
//! without touching the gate.
use async_trait::async_trait;
use thiserror::Error;

use crate::services::auth::claims::ClaimSet;

#[derive(Debug, Error)]
pub enum RevocationError {
    #[error("revocation backend error: {0}")]
    Backend(String),
}

/// Revocation lookup and registration.
///
/// Returns:
/// - `Ok(true)`  => token was revoked, reject it
/// - `Ok(false)` => token is not known to be revoked
/// - `Err(_)`    => backend failure (gate treats it as a rejection)
#[async_trait]
pub trait RevocationChecker: Send + Sync {
    async fn is_revoked(&self, token: &str, claims: &ClaimSet) -> Result<bool, RevocationError>;

    // Register `token` as revoked. Called by logout when the client sends its token.
    async fn revoke(&self, token: &str) -> Result<(), RevocationError>;
}

/// Default: no token is ever revoked and `revoke` is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverRevoked;

#[async_trait]
impl RevocationChecker for NeverRevoked {
    async fn is_revoked(&self, _token: &str, _claims: &ClaimSet) -> Result<bool, RevocationError> {
        Ok(false)
    }

    async fn revoke(&self, _token: &str) -> Result<(), RevocationError> {
        Ok(())
    }
}
