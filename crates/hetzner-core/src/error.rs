//! Provider error types

use thiserror::Error;

/// Errors surfaced by transport clients and resource controllers
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The remote API answered with a non-success status. The status code is
    /// a structured field so callers match on it instead of searching the
    /// rendered message.
    #[error("remote API error (HTTP {status}): {body}")]
    Remote { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("error encoding request payload: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("error encoding form body: {0}")]
    FormEncoding(#[from] serde_urlencoded::ser::Error),

    #[error("error parsing API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unsupported boot mode: {0} (only 'rescue' is implemented)")]
    UnsupportedMode(String),

    #[error("rescue mode already active on server {0}")]
    AlreadyActive(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("invalid provider configuration: {0}")]
    InvalidConfig(String),

    #[error("missing required attribute: {0}")]
    MissingAttribute(&'static str),

    #[error("unknown resource type: {0}")]
    UnknownResourceType(String),

    #[error("unknown data source type: {0}")]
    UnknownDataSource(String),

    #[error("duplicate type registration: {0}")]
    DuplicateType(String),
}

impl ProviderError {
    /// True when the remote reported 404 for the requested entity.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::Remote { status: 404, .. })
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
