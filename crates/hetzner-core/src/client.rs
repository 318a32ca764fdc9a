//! Transport client trait shared by the Robot and Cloud backends

use crate::error::{ProviderError, Result};
use async_trait::async_trait;

/// HTTP method type used across the provider.
pub use reqwest::Method;

/// Request body for plain (non-form) requests.
///
/// The Robot and Cloud APIs are called with either a value that still needs
/// JSON encoding or text a caller has already encoded; pre-encoded text is
/// sent verbatim, never re-encoded.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Pre-encoded body text, passed through unmodified.
    Raw(String),
    /// Serialized to JSON before sending.
    Json(serde_json::Value),
}

impl Payload {
    /// Render the payload into the bytes that go on the wire.
    pub fn into_body(self) -> Result<String> {
        match self {
            Payload::Raw(text) => Ok(text),
            Payload::Json(value) => {
                serde_json::to_string(&value).map_err(ProviderError::Encoding)
            }
        }
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Raw(text)
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Raw(text.to_string())
    }
}

impl From<serde_json::Value> for Payload {
    fn from(value: serde_json::Value) -> Self {
        Payload::Json(value)
    }
}

/// Transport abstraction implemented by every backend client.
///
/// Resource controllers are written against this trait only; which backend
/// actually serves a request is decided once, at provider construction.
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Issue a request with an optional JSON (or pre-encoded) body and
    /// return the raw response bytes. No JSON validation happens here;
    /// decoding is the caller's job.
    async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<Vec<u8>>;

    /// Issue a request with an `application/x-www-form-urlencoded` body.
    /// Fields are an ordered sequence of pairs; repeated keys encode as
    /// repeated fields.
    async fn form_request(
        &self,
        method: Method,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<Vec<u8>>;
}

/// Map an HTTP response to the transport contract: any status below 300
/// yields the body bytes unconditionally, anything else is a
/// [`ProviderError::Remote`] carrying the status and the body verbatim.
pub fn classify_response(status: u16, body: Vec<u8>) -> Result<Vec<u8>> {
    if status < 300 {
        Ok(body)
    } else {
        Err(ProviderError::Remote {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        })
    }
}

/// URL-form-encode an ordered field list.
pub fn encode_form(fields: &[(String, String)]) -> Result<String> {
    Ok(serde_urlencoded::to_string(fields)?)
}
