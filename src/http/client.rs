//! `reqwest`-backed [`Transport`] implementation.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::error::HttpError;
use crate::http::transport::{HttpRequest, HttpResponse, Method, Transport};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default transport used by `CFToolsClient`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured `reqwest::Client`.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = request.full_url();
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut req = self
            .client
            .request(method, &url)
            .header(reqwest::header::ACCEPT, "application/json");
        for (name, value) in &request.options.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.options.body {
            req = req.json(body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        tracing::debug!(
            method = request.method.as_str(),
            status = status.as_u16(),
            "{}",
            url
        );

        if status.is_success() {
            return Ok(HttpResponse::new(status.as_u16(), body));
        }

        Err(HttpError::Status {
            status: status.as_u16(),
            url,
            body,
        })
    }
}
