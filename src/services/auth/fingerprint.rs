use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::services::auth::verifier::VerifyError;

/// Short, non-reversible token identifier for log correlation.
///
/// Raw bearer tokens never go into logs; this is the first 9 bytes of SHA-256,
/// base64url encoded (12 chars).
pub fn token_fingerprint(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    URL_SAFE_NO_PAD.encode(&digest[..9])
}

/// Log a rejected token with its fingerprint and the library detail.
pub fn log_rejection(err: &VerifyError, token: &str, stage: &'static str) {
    warn!(
        stage,
        kind = err.kind.as_str(),
        detail = ?err.detail,
        token = %token_fingerprint(token),
        "token rejected"
    );
}
