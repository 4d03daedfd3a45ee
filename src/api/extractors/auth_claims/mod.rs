/*!
 * Authenticated claims extractor
 *
 * Responsibility:
 * - Hand the claims verified by the gate to handlers
 * - The type lives in `types`, the axum plumbing in `core`
 */

mod core;
mod types;

pub use self::core::AuthClaimsExtractor;
pub use types::AuthClaims;
