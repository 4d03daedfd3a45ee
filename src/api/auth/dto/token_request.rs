use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

/// Body of `/login/`, `/validate-token/` and (optionally) `/logout/`.
///
/// Accepted shapes, tried in order:
/// - JSON object: `{"token": "<jwt>"}`
/// - form-encoded: `token=<jwt>` (only when the body is not a JSON object)
///
/// A JSON object without a non-empty string `token` means "no token"; it does not
/// fall back to form parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRequest {
    pub token: Option<String>,
}

impl TokenRequest {
    pub fn from_body(body: &[u8]) -> Self {
        let token = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map
                .get("token")
                .and_then(Value::as_str)
                .map(str::to_owned),
            _ => url::form_urlencoded::parse(body)
                .find(|(key, _)| key == "token")
                .map(|(_, value)| value.into_owned()),
        };

        Self {
            token: token.filter(|t| !t.is_empty()),
        }
    }
}

impl<S> FromRequest<S> for TokenRequest
where
    S: Send + Sync,
{
    // Body read failures (e.g. over the size limit) keep axum's own status
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        Ok(Self::from_body(&body))
    }
}
