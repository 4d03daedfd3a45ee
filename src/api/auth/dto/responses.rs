use serde::Serialize;

use crate::services::auth::ClaimSet;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub claims: ClaimSet,
}

/// `valid: true` carries `claims`, `valid: false` carries `error`.
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<ClaimSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidateResponse {
    pub fn valid(claims: ClaimSet) -> Self {
        Self {
            valid: true,
            claims: Some(claims),
            error: None,
        }
    }

    pub fn invalid(error: String) -> Self {
        Self {
            valid: false,
            claims: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
}
