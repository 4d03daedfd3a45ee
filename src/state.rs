/*
 * Responsibility
 * - Shared context attached to the Router (AppState)
 * - Clone is cheap: everything sits behind Arc and is read-only after startup
 */
use std::sync::Arc;

use crate::config::DEFAULT_PROTECTED_PREFIX;
use crate::services::auth::{
    AcceptAllTokenKinds, NeverRevoked, RevocationChecker, TokenKindPolicy, Verifier,
};

#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<Verifier>,
    pub revocation: Arc<dyn RevocationChecker>,
    pub token_kind: Arc<dyn TokenKindPolicy>,
    pub protected_prefix: Arc<str>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("verifier", &self.verifier)
            .field("protected_prefix", &self.protected_prefix)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(verifier: Arc<Verifier>) -> Self {
        Self {
            verifier,
            revocation: Arc::new(NeverRevoked),
            token_kind: Arc::new(AcceptAllTokenKinds),
            protected_prefix: Arc::from(DEFAULT_PROTECTED_PREFIX),
        }
    }

    pub fn with_protected_prefix(mut self, prefix: impl AsRef<str>) -> Self {
        self.protected_prefix = Arc::from(prefix.as_ref());
        self
    }

    pub fn with_revocation(mut self, revocation: Arc<dyn RevocationChecker>) -> Self {
        self.revocation = revocation;
        self
    }

    pub fn with_token_kind(mut self, policy: Arc<dyn TokenKindPolicy>) -> Self {
        self.token_kind = policy;
        self
    }

    pub fn is_protected(&self, path: &str) -> bool {
        path.starts_with(self.protected_prefix.as_ref())
    }
}
