pub mod claims;
pub mod factory;
pub mod fingerprint;
pub mod revocation;
pub mod token_kind;
pub mod trust;
pub mod verifier;

#[cfg(test)]
pub(crate) mod test_keys;

pub use claims::ClaimSet;
pub use factory::build_verifier;
pub use fingerprint::{log_rejection, token_fingerprint};
pub use revocation::{NeverRevoked, RevocationChecker, RevocationError};
pub use token_kind::{AcceptAllTokenKinds, TokenKindPolicy, TokenKindRejected};
pub use trust::TrustConfig;
pub use verifier::{FailureKind, VerificationOutcome, Verifier, VerifyError, verify};
