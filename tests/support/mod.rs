#![allow(dead_code)]

// Integration tests cannot see the crate's `#[cfg(test)]` key helpers, so key
// generation and minting are repeated here. Only the claim values differ.

use std::sync::{Arc, LazyLock};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use rsa::RsaPrivateKey;
use rsa::pkcs1::{EncodeRsaPrivateKey, LineEnding};
use rsa::pkcs8::EncodePublicKey;
use rsa::rand_core::OsRng;
use serde_json::{Value, json};
use token_gate::config::Config;
use token_gate::services::auth::{TrustConfig, Verifier};
use token_gate::state::AppState;
use tower::ServiceExt; // oneshot

pub const ISSUER: &str = "https://auth.example.test";
pub const AUDIENCE: &str = "3c219e58-ed0e-4b18-ad48-f4f92793ae32";

pub struct KeyMaterial {
    pub encoding: EncodingKey,
    pub public_pem: String,
}

fn generate() -> KeyMaterial {
    let mut rng = OsRng;
    let private_key = RsaPrivateKey::new(&mut rng, 2048).expect("key generation");
    let private_pem = private_key
        .to_pkcs1_pem(LineEnding::LF)
        .expect("private pem");
    // SPKI ("BEGIN PUBLIC KEY"), the format identity providers publish
    let public_pem = private_key
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .expect("public pem");

    KeyMaterial {
        encoding: EncodingKey::from_rsa_pem(private_pem.as_bytes()).expect("encoding key"),
        public_pem,
    }
}

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

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn standard_claims() -> Value {
    json!({
        "iss": ISSUER,
        "aud": AUDIENCE,
        "sub": "2b6c1f0e-9a7d-4e63-9d2b-0c5f8e1a7b44",
        "email": "ada@example.com",
        "roles": ["admin"],
        "iat": now(),
        "exp": now() + 600,
    })
}

pub fn mint(keys: &KeyMaterial, claims: &Value) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.typ = Some("JWT".to_string());
    jsonwebtoken::encode(&header, claims, &keys.encoding).expect("sign token")
}

pub fn valid_token() -> String {
    mint(trusted_keys(), &standard_claims())
}

pub fn expired_token() -> String {
    let mut claims = standard_claims();
    claims["iat"] = json!(now() - 7200);
    claims["exp"] = json!(now() - 3600);
    mint(trusted_keys(), &claims)
}

pub fn state() -> AppState {
    AppState::new(Arc::new(Verifier::new(trusted_config())))
}

pub fn unconfigured_state() -> AppState {
    AppState::new(Arc::new(Verifier::new(TrustConfig::default())))
}

pub fn config() -> Config {
    Config::from_lookup(|_| None).expect("default config")
}

/// Full application router (all middleware) over `state`.
pub fn app(state: AppState) -> Router {
    token_gate::app::build_router(state, &config())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

pub fn get_with_auth(uri: &str, authorization: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::AUTHORIZATION, authorization)
        .body(Body::empty())
        .expect("request")
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: Router, req: Request<Body>) -> TestResponse {
    let resp = app.oneshot(req).await.expect("infallible");
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = resp
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    TestResponse {
        status,
        headers,
        body,
    }
}
