/*
 * Responsibility
 * - Read environment (and .env) once at startup
 * - Validate values that would make the server misbehave (bad PORT, bad prefix)
 * - Missing trust settings are NOT a startup error: the verifier fails closed instead
 */
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

use crate::services::auth::TrustConfig;

pub const DEFAULT_PROTECTED_PREFIX: &str = "/api/protected/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(raw: Option<String>) -> Self {
        match raw
            .unwrap_or_else(|| "development".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    // FusionAuth (or any OIDC provider) trust anchor
    pub trust: TrustConfig,
    pub leeway_seconds: u64,

    pub protected_prefix: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (env in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 8000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV"));

        let cors_allowed_origins = [
            lookup("FRONTEND_DEV_ORIGIN").or_else(|| Some("http://localhost:3000".to_string())),
            lookup("FRONTEND_PROD_ORIGIN"),
        ]
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

        let trust = TrustConfig {
            issuer: lookup("FUSIONAUTH_ISSUER").unwrap_or_default(),
            audience: lookup("FUSIONAUTH_CLIENT_ID").unwrap_or_default(),
            // PEM is often stored on a single line with escaped newlines
            public_key_pem: lookup("FUSIONAUTH_JWT_PUBLIC_KEY")
                .unwrap_or_default()
                .replace("\\n", "\n"),
        };

        let leeway_seconds = match lookup("AUTH_LEEWAY_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid("AUTH_LEEWAY_SECONDS"))?,
            None => 0,
        };

        let protected_prefix = lookup("PROTECTED_PATH_PREFIX")
            .unwrap_or_else(|| DEFAULT_PROTECTED_PREFIX.to_string());
        if protected_prefix.is_empty() || !protected_prefix.starts_with('/') {
            return Err(ConfigError::Invalid("PROTECTED_PATH_PREFIX"));
        }

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            trust,
            leeway_seconds,
            protected_prefix,
        })
    }
}
