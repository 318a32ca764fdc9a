//! Cloud API transport client

use async_trait::async_trait;
use hetzner_core::{ApiClient, Method, Payload, Result, classify_response, encode_form};
use reqwest::header::CONTENT_TYPE;

/// Client for the Cloud API (Bearer-token authentication).
#[derive(Debug, Clone)]
pub struct CloudClient {
    http: reqwest::Client,
    token: String,
    base_url: String,
}

impl CloudClient {
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<(String, &'static str)>,
    ) -> Result<Vec<u8>> {
        tracing::debug!("cloud API request: {} {}", method, path);

        let mut request = self
            .http
            .request(method, self.endpoint(path))
            .bearer_auth(&self.token);

        if let Some((body, content_type)) = body {
            request = request.header(CONTENT_TYPE, content_type).body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?.to_vec();
        classify_response(status, bytes)
    }
}

#[async_trait]
impl ApiClient for CloudClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<Vec<u8>> {
        let body = payload
            .map(Payload::into_body)
            .transpose()?
            .map(|body| (body, "application/json"));
        self.send(method, path, body).await
    }

    async fn form_request(
        &self,
        method: Method,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<Vec<u8>> {
        let body = encode_form(fields)?;
        self.send(
            method,
            path,
            Some((body, "application/x-www-form-urlencoded")),
        )
        .await
    }
}
