//! RSA key material and token minting shared by unit tests.

use std::sync::LazyLock;

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use rsa::RsaPrivateKey;
use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding};
use rsa::pkcs8::EncodePublicKey;
use rsa::rand_core::OsRng;
use serde_json::{Value, json};

use crate::services::auth::trust::TrustConfig;

pub const ISSUER: &str = "https://idp.example.test";
pub const AUDIENCE: &str = "client-0e1f";

pub struct KeyMaterial {
    pub encoding: EncodingKey,
    /// SPKI ("BEGIN PUBLIC KEY"), the format identity providers publish.
    pub public_pem: String,
    /// Same key as bare PKCS#1 ("BEGIN RSA PUBLIC KEY").
    pub pkcs1_public_pem: String,
}

fn generate() -> KeyMaterial {
    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("key generation");
    let private_pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .expect("private pem");
    let public_key = private_key.to_public_key();
    let public_pem = public_key
        .to_public_key_pem(LineEnding::LF)
        .expect("spki pem");
    let pkcs1_public_pem = public_key
        .to_pkcs1_pem(LineEnding::LF)
        .expect("pkcs1 pem");

    KeyMaterial {
        encoding: EncodingKey::from_rsa_pem(private_pem.as_bytes()).expect("encoding key"),
        public_pem,
        pkcs1_public_pem,
    }
}

// Key generation is slow in debug builds; generate each pair once per test binary.
static TRUSTED: LazyLock<KeyMaterial> = LazyLock::new(generate);
static ROGUE: LazyLock<KeyMaterial> = LazyLock::new(generate);

pub fn trusted_keys() -> &'static KeyMaterial {
    &TRUSTED
}

pub fn rogue_keys() -> &'static KeyMaterial {
    &ROGUE
}

pub fn trusted_config() -> TrustConfig {
    TrustConfig::new(ISSUER, AUDIENCE, trusted_keys().public_pem.clone())
}

pub fn standard_claims() -> Value {
    let now = chrono::Utc::now().timestamp();
    json!({
        "iss": ISSUER,
        "aud": AUDIENCE,
        "sub": "user-42",
        "iat": now,
        "exp": now + 600,
    })
}

pub fn mint(keys: &KeyMaterial, claims: &Value) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.typ = Some("JWT".to_string());
    jsonwebtoken::encode(&header, claims, &keys.encoding).expect("sign token")
}
