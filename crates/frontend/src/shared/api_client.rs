//! Authenticated HTTP access to the admin API
//!
//! Every request carries `Authorization: Bearer <token>` when a token is
//! stored. Calls are fire-once: no retries and no caching.

use crate::shared::api_utils::api_url;
use crate::system::auth::storage;
use contracts::shared::api::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use web_sys::FormData;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Failed to send request: {0}")]
    Network(String),
    #[error("Session expired, please log in again")]
    Unauthorized,
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    /// Server supplied reason, used by pages that show it verbatim
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => Some(message),
            _ => None,
        }
    }
}

fn authorized(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let request = authorized(Request::get(&api_url(path)))
        .build()
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    execute(path, request).await
}

pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = authorized(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    execute(path, request).await
}

pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = authorized(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    execute(path, request).await
}

/// The browser sets the multipart boundary header itself
pub async fn post_multipart<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let request = authorized(Request::post(&api_url(path)))
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    execute(path, request).await
}

pub async fn put_multipart<T: DeserializeOwned>(path: &str, form: FormData) -> Result<T, ApiError> {
    let request = authorized(Request::put(&api_url(path)))
        .body(form)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    execute(path, request).await
}

async fn execute<T: DeserializeOwned>(path: &str, request: Request) -> Result<T, ApiError> {
    let response = request.send().await.map_err(|e| {
        log::error!("{} failed to send: {}", path, e);
        ApiError::Network(e.to_string())
    })?;

    let status = response.status();
    let ok = response.ok();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;

    if let Err(e) = check_status(status, ok, &body) {
        log::warn!("{} answered {}: {}", path, status, e);
        return Err(e);
    }
    decode_body(&body).map_err(|e| {
        log::error!("{}: {}", path, e);
        e
    })
}

fn check_status(status: u16, ok: bool, body: &str) -> Result<(), ApiError> {
    if status == 401 {
        return Err(ApiError::Unauthorized);
    }
    if !ok {
        let message = ApiErrorBody::reason_from_body(body)
            .unwrap_or_else(|| format!("Request failed: {}", status));
        return Err(ApiError::Server { status, message });
    }
    Ok(())
}

/// Empty bodies decode as JSON `null`
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityRecord;
    use contracts::shared::api::ApiEnvelope;

    #[test]
    fn test_status_mapping() {
        assert_eq!(check_status(200, true, ""), Ok(()));
        assert_eq!(check_status(401, false, ""), Err(ApiError::Unauthorized));
        assert_eq!(
            check_status(422, false, r#"{"error":{"message":"Title taken"}}"#),
            Err(ApiError::Server {
                status: 422,
                message: "Title taken".to_string()
            })
        );
        assert_eq!(
            check_status(500, false, "oops").unwrap_err().to_string(),
            "Request failed: 500"
        );
    }

    #[test]
    fn test_decode_envelope() {
        let body = r#"{"data":[{"id":1,"status":"active","title":"Hero"},{"id":2,"status":"terminated"}]}"#;
        let envelope: ApiEnvelope<Vec<EntityRecord>> = decode_body(body).unwrap();
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(envelope.data[0].text("title"), "Hero");
    }

    #[test]
    fn test_decode_empty_and_broken_bodies() {
        let value: serde_json::Value = decode_body("").unwrap();
        assert!(value.is_null());
        let broken: Result<ApiEnvelope<Vec<EntityRecord>>, _> = decode_body("{");
        assert!(matches!(broken, Err(ApiError::Decode(_))));
    }
}
