//! Robot API transport client

use async_trait::async_trait;
use hetzner_core::{ApiClient, Method, Payload, Result, classify_response, encode_form};
use reqwest::header::CONTENT_TYPE;

/// Client for the Robot API (Basic Authentication).
///
/// Credentials and base URL are immutable after construction, so the client
/// is safe to share across concurrent callers. No retries, no timeout
/// overrides; reqwest defaults apply.
#[derive(Debug, Clone)]
pub struct RobotClient {
    http: reqwest::Client,
    user: String,
    password: String,
    base_url: String,
}

impl RobotClient {
    pub fn new(
        user: impl Into<String>,
        password: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            user: user.into(),
            password: password.into(),
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
        tracing::debug!("robot API request: {} {}", method, path);

        let mut request = self
            .http
            .request(method, self.endpoint(path))
            .basic_auth(&self.user, Some(&self.password));

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
impl ApiClient for RobotClient {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let client = RobotClient::new("u", "p", "https://robot-ws.your-server.de/");
        assert_eq!(client.base_url(), "https://robot-ws.your-server.de");
        assert_eq!(
            client.endpoint("/boot/321/rescue"),
            "https://robot-ws.your-server.de/boot/321/rescue"
        );
    }
}
