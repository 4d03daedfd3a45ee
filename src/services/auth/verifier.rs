use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use thiserror::Error;
use tracing::{debug, error};

use crate::services::auth::claims::ClaimSet;
use crate::services::auth::trust::TrustConfig;

/// Why a token was refused.
///
/// `Expired` is kept apart from the other failures: clients re-authenticate on it,
/// whereas the rest usually point at a client bug or a foreign token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    ConfigurationMissing,
    Malformed,
    SignatureInvalid,
    Expired,
    InvalidClaim,
    Invalid,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigurationMissing => "configuration_missing",
            Self::Malformed => "malformed",
            Self::SignatureInvalid => "signature_invalid",
            Self::Expired => "expired",
            Self::InvalidClaim => "invalid_claim",
            Self::Invalid => "invalid",
        }
    }
}

/// Classified verification failure.
///
/// `message` is safe to return to clients. `detail` holds the underlying library
/// error for logs only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VerifyError {
    pub kind: FailureKind,
    pub message: String,
    pub detail: Option<String>,
}

/// `Ok` is a valid token with its claims, `Err` a classified rejection.
pub type VerificationOutcome = Result<ClaimSet, VerifyError>;

impl VerifyError {
    fn new(kind: FailureKind, message: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail,
        }
    }

    pub fn configuration_missing() -> Self {
        Self::new(
            FailureKind::ConfigurationMissing,
            "Auth configuration missing.",
            None,
        )
    }

    pub fn configuration_invalid(detail: impl Into<String>) -> Self {
        Self::new(
            FailureKind::ConfigurationMissing,
            "Auth configuration invalid.",
            Some(detail.into()),
        )
    }

    pub fn expired() -> Self {
        Self::new(FailureKind::Expired, "Token has expired.", None)
    }

    pub fn invalid_claim(reason: impl std::fmt::Display) -> Self {
        Self::new(
            FailureKind::InvalidClaim,
            format!("Invalid token: {reason}"),
            None,
        )
    }

    fn from_jwt(err: jsonwebtoken::errors::Error) -> Self {
        let detail = Some(err.to_string());
        match err.kind() {
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => Self::new(
                FailureKind::Malformed,
                "Invalid token: malformed token",
                detail,
            ),
            ErrorKind::InvalidSignature => Self::new(
                FailureKind::SignatureInvalid,
                "Invalid token: signature verification failed",
                detail,
            ),
            ErrorKind::ExpiredSignature => Self {
                detail,
                ..Self::expired()
            },
            // also reported when the claim is present but not a number
            ErrorKind::MissingRequiredClaim(claim) => Self {
                detail,
                ..Self::invalid_claim(format!("missing or invalid '{claim}' claim"))
            },
            _ => Self::new(
                FailureKind::Invalid,
                "Invalid token: verification failed",
                detail,
            ),
        }
    }
}

enum KeyState {
    Missing,
    Unparsable(String),
    Ready(DecodingKey),
}

/// RS256 bearer-token verifier.
///
/// Holds only immutable state, so one instance is shared behind an `Arc` by every
/// request task. Key material is not printable via Debug.
pub struct Verifier {
    trust: TrustConfig,
    key: KeyState,
    validation: Validation,
    leeway_seconds: u64,
}

impl std::fmt::Debug for Verifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verifier")
            .field("trust", &self.trust)
            .field("ready", &self.is_ready())
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}

impl Verifier {
    pub fn new(trust: TrustConfig) -> Self {
        Self::with_leeway(trust, 0)
    }

    /// An incomplete or unparsable trust config does not fail construction: the
    /// verifier is built anyway and rejects every token.
    pub fn with_leeway(trust: TrustConfig, leeway_seconds: u64) -> Self {
        let key = if !trust.is_complete() {
            KeyState::Missing
        } else {
            match DecodingKey::from_rsa_pem(trust.public_key_pem.as_bytes()) {
                Ok(key) => KeyState::Ready(key),
                Err(e) => {
                    error!(error = %e, "failed to parse token public key PEM (expected RSA)");
                    KeyState::Unparsable(e.to_string())
                }
            }
        };

        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = leeway_seconds;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_required_spec_claims(&["exp"]);
        // aud and iss are compared below, after the temporal checks, with exact
        // single-value semantics.
        validation.validate_aud = false;

        Self {
            trust,
            key,
            validation,
            leeway_seconds,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.key, KeyState::Ready(_))
    }

    /// Verify a compact JWS and return its full claim set.
    ///
    /// Order: config presence, structure, signature, `exp`, `iat`, `aud`, `iss`.
    pub fn verify(&self, token: &str) -> VerificationOutcome {
        let key = match &self.key {
            KeyState::Missing => return Err(VerifyError::configuration_missing()),
            KeyState::Unparsable(detail) => {
                return Err(VerifyError::configuration_invalid(detail.clone()));
            }
            KeyState::Ready(key) => key,
        };

        let data = jsonwebtoken::decode::<ClaimSet>(token, key, &self.validation)
            .map_err(VerifyError::from_jwt)?;
        let claims = data.claims;

        self.check_issued_at(&claims, chrono::Utc::now().timestamp())?;
        self.check_audience(&claims)?;
        self.check_issuer(&claims)?;

        debug!(sub = ?claims.subject(), "token verified");
        Ok(claims)
    }

    fn check_issued_at(&self, claims: &ClaimSet, now: i64) -> Result<(), VerifyError> {
        let iat = match claims.get("iat") {
            None => return Err(VerifyError::invalid_claim("missing 'iat' claim")),
            Some(value) => value
                .as_f64()
                .ok_or_else(|| VerifyError::invalid_claim("'iat' must be a number"))?,
        };

        let leeway = i64::try_from(self.leeway_seconds).unwrap_or(i64::MAX);
        if iat > now.saturating_add(leeway) as f64 {
            return Err(VerifyError::invalid_claim("token issued in the future"));
        }

        // exp has already been validated as present and numeric by the decoder
        if let Some(exp) = claims.get("exp").and_then(|v| v.as_f64())
            && iat > exp
        {
            return Err(VerifyError::invalid_claim("'iat' is later than 'exp'"));
        }

        Ok(())
    }

    fn check_audience(&self, claims: &ClaimSet) -> Result<(), VerifyError> {
        match claims.get("aud") {
            None => Err(VerifyError::invalid_claim("missing 'aud' claim")),
            Some(serde_json::Value::String(aud)) if *aud == self.trust.audience => Ok(()),
            Some(serde_json::Value::String(_)) => {
                Err(VerifyError::invalid_claim("invalid audience"))
            }
            // Multi-audience tokens are not accepted even when they list ours.
            Some(serde_json::Value::Array(_)) => {
                Err(VerifyError::invalid_claim("'aud' must be a single value"))
            }
            Some(_) => Err(VerifyError::invalid_claim("invalid audience")),
        }
    }

    fn check_issuer(&self, claims: &ClaimSet) -> Result<(), VerifyError> {
        match claims.get_str("iss") {
            Some(iss) if iss == self.trust.issuer => Ok(()),
            Some(_) => Err(VerifyError::invalid_claim("invalid issuer")),
            None => Err(VerifyError::invalid_claim("missing 'iss' claim")),
        }
    }
}

/// One-shot form of [`Verifier::verify`]. Parses the key on every call, so request
/// paths should hold a `Verifier` instead.
pub fn verify(token: &str, trust: &TrustConfig) -> VerificationOutcome {
    if !trust.is_complete() {
        return Err(VerifyError::configuration_missing());
    }
    Verifier::new(trust.clone()).verify(token)
}
