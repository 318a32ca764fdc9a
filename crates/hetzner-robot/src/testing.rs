//! Scripted test double for the `ApiClient` seam

use async_trait::async_trait;
use hetzner_core::{ApiClient, Method, Payload, ProviderError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

/// One request as seen by the fake transport.
#[derive(Debug, Clone)]
pub(crate) struct Call {
    pub method: Method,
    pub path: String,
    pub form: Option<Vec<(String, String)>>,
}

/// `ApiClient` double that replays scripted responses in order and records
/// every request it is handed.
pub(crate) struct FakeClient {
    responses: Mutex<VecDeque<Result<Vec<u8>>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond(self, body: &[u8]) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.to_vec()));
        self
    }

    pub fn respond_err(self, err: ProviderError) -> Self {
        self.responses.lock().unwrap().push_back(Err(err));
        self
    }

    /// A remote 404, the shape transport clients produce for missing
    /// entities.
    pub fn not_found() -> ProviderError {
        ProviderError::Remote {
            status: 404,
            body: r#"{"error":{"status":404,"code":"NOT_FOUND"}}"#.to_string(),
        }
    }

    pub fn server_error() -> ProviderError {
        ProviderError::Remote {
            status: 500,
            body: "INTERNAL_ERROR".to_string(),
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self) -> Result<Vec<u8>> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted response left")
    }
}

#[async_trait]
impl ApiClient for FakeClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        _payload: Option<Payload>,
    ) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            form: None,
        });
        self.next()
    }

    async fn form_request(
        &self,
        method: Method,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            form: Some(fields.to_vec()),
        });
        self.next()
    }
}
