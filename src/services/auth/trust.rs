//! Trust anchor for token verification.
//!
//! Built once from `Config` at startup and never mutated afterwards.

/// Identity-provider parameters a token must match.
///
/// - `issuer` is compared against `iss`
/// - `audience` (the client id) is compared against `aud`
/// - `public_key_pem` is the RSA public key used for RS256 signatures
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TrustConfig {
    pub issuer: String,
    pub audience: String,
    pub public_key_pem: String,
}

impl std::fmt::Debug for TrustConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of logs
        f.debug_struct("TrustConfig")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("public_key_pem", &!self.public_key_pem.is_empty())
            .finish()
    }
}

impl TrustConfig {
    pub fn new(
        issuer: impl Into<String>,
        audience: impl Into<String>,
        public_key_pem: impl Into<String>,
    ) -> Self {
        Self {
            issuer: issuer.into(),
            audience: audience.into(),
            public_key_pem: public_key_pem.into(),
        }
    }

    /// Names of the fields that are empty (or whitespace only).
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.issuer.trim().is_empty() {
            missing.push("issuer");
        }
        if self.audience.trim().is_empty() {
            missing.push("audience");
        }
        if self.public_key_pem.trim().is_empty() {
            missing.push("public_key_pem");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
