/// Factory: build the shared `Verifier` from application `Config`.
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::services::auth::Verifier;

pub fn build_verifier(config: &Config) -> Arc<Verifier> {
    let missing = config.trust.missing_fields();
    if !missing.is_empty() {
        // Keep serving: gated routes answer 403 until the environment is fixed.
        warn!(
            ?missing,
            "token trust configuration incomplete; every token will be rejected"
        );
    }

    let verifier = Verifier::with_leeway(config.trust.clone(), config.leeway_seconds);
    if verifier.is_ready() {
        info!(
            issuer = %config.trust.issuer,
            audience = %config.trust.audience,
            leeway_seconds = config.leeway_seconds,
            "token verifier ready"
        );
    }

    Arc::new(verifier)
}
