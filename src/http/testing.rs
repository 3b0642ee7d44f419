//! Scripted in-memory transport for unit tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::HttpError;
use crate::http::transport::{HttpRequest, HttpResponse, Transport};

enum Scripted {
    Ok(u16, String),
    Status(u16, String),
}

/// Replays queued responses in order and records every request it receives.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_ok(&self, body: &str) {
        self.push(Scripted::Ok(200, body.to_string()));
    }

    pub(crate) fn push_status(&self, status: u16, body: &str) {
        self.push(Scripted::Status(status, body.to_string()));
    }

    /// Queue a tagged API error body, e.g. `(403, "expired-token")`.
    pub(crate) fn push_api_error(&self, status: u16, tag: &str) {
        let body = serde_json::json!({"status": false, "error": tag}).to_string();
        self.push(Scripted::Status(status, body));
    }

    fn push(&self, response: Scripted) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn request(&self, index: usize) -> HttpRequest {
        self.requests.lock().unwrap()[index].clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = request.full_url();
        self.requests.lock().unwrap().push(request);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for {url}"));

        match next {
            Scripted::Ok(status, body) => Ok(HttpResponse::new(status, body)),
            Scripted::Status(status, body) => Err(HttpError::Status { status, url, body }),
        }
    }
}
