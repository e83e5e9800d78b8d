//! Backend API Wrappers
//!
//! Thin HTTP bindings to the case/report backend, organized by domain.
//! All requests go through the helpers here: bearer-token injection, base
//! URL resolution, response-envelope normalization and an explicit timeout.

mod activities;
mod admin;
mod cases;
mod reports;
mod requests;

use futures::future::{select, Either};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export all public items
pub use activities::*;
pub use admin::*;
pub use cases::*;
pub use reports::*;
pub use requests::*;

/// Hard cap per request; a hung backend surfaces as an error, not a spinner
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

const TOKEN_KEY: &str = "casedesk_token";

/// Everything a fetch can fail with. Views collapse all variants into one
/// "load failed" toast; the variant detail goes to the console.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned HTTP {0}")]
    Http(u16),
    #[error("unexpected response shape: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
}

/// Bearer token from client-side storage, if the operator is signed in
fn auth_token() -> Option<String> {
    web_sys::window()?.local_storage().ok()??.get_item(TOKEN_KEY).ok()?
}

/// Base URL from `<body data-api-base="...">`, same-origin when absent
fn api_base() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.get_attribute("data-api-base"))
        .unwrap_or_default()
}

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

/// Send one request with auth header and timeout, map transport failures
async fn execute(builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let builder = match auth_token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    };
    let request = builder.send();
    let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    pin_mut!(request);
    pin_mut!(timeout);

    let response = match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
        Either::Right(((), _)) => return Err(ApiError::Timeout),
    };
    if !response.status().is_success() {
        return Err(ApiError::Http(response.status().as_u16()));
    }
    Ok(response)
}

pub(crate) async fn get_json<T: DeserializeOwned>(
    path: &str,
    query: &[(&str, String)],
) -> Result<T, ApiError> {
    let response = execute(client().get(url(path)).query(query)).await?;
    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    normalize(value)
}

pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = execute(client().post(url(path)).json(body)).await?;
    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    normalize(value)
}

pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let response = execute(client().put(url(path)).json(body)).await?;
    let value: serde_json::Value = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    normalize(value)
}

pub(crate) async fn delete(path: &str) -> Result<(), ApiError> {
    execute(client().delete(url(path))).await?;
    Ok(())
}

/// Fetch an opaque binary body (PDF download endpoints)
pub(crate) async fn get_bytes(path: &str, query: &[(&str, String)]) -> Result<Vec<u8>, ApiError> {
    let response = execute(client().get(url(path)).query(query)).await?;
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    Ok(bytes.to_vec())
}

// ========================
// Envelope normalization
// ========================

// The backend is inconsistent: most endpoints wrap payloads as
// `{status, data}`, a few nest a second `data` level, and a couple return
// the payload bare. All three shapes are flattened here, once. Anything
// else is a contract bug and comes back as Decode.

#[derive(Deserialize)]
#[serde(untagged)]
enum Payload<T> {
    Enveloped(Envelope<T>),
    Bare(T),
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    #[allow(dead_code)]
    status: Option<String>,
    data: Nested<T>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Nested<T> {
    Wrapped { data: T },
    Plain(T),
}

fn normalize<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    match serde_json::from_value::<Payload<T>>(value) {
        Ok(Payload::Enveloped(envelope)) => Ok(match envelope.data {
            Nested::Wrapped { data } => data,
            Nested::Plain(data) => data,
        }),
        Ok(Payload::Bare(data)) => Ok(data),
        Err(_) => Err(ApiError::Decode(
            "response matched neither {status, data} nor the bare payload".into(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: u64,
        title: String,
    }

    #[test]
    fn normalizes_standard_envelope() {
        let value = json!({"status": "ok", "data": [{"id": 1, "title": "a"}]});
        let rows: Vec<Row> = normalize(value).unwrap();
        assert_eq!(rows, vec![Row { id: 1, title: "a".into() }]);
    }

    #[test]
    fn normalizes_double_nested_envelope() {
        let value = json!({"data": {"data": {"id": 7, "title": "nested"}}});
        let row: Row = normalize(value).unwrap();
        assert_eq!(row.id, 7);
        assert_eq!(row.title, "nested");
    }

    #[test]
    fn normalizes_bare_payload() {
        let value = json!({"id": 3, "title": "bare"});
        let row: Row = normalize(value).unwrap();
        assert_eq!(row.id, 3);
    }

    #[test]
    fn rejects_contract_violations() {
        let value = json!({"status": "ok"});
        let result: Result<Row, ApiError> = normalize(value);
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
