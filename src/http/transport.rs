//! Transport abstraction — the seam between the SDK core and an HTTP client.
//!
//! The core never talks to `reqwest` directly. Everything goes through
//! [`Transport`], which tests replace with scripted implementations.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{HttpError, SdkError};

/// HTTP verbs used by the data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

/// Whether a request needs a credential attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Fails with `AuthenticationRequired` when no credential is available.
    #[default]
    Required,
    /// Attaches a credential when one is available, anonymous otherwise.
    Optional,
    /// Never attaches a credential.
    None,
}

/// Per-request context. Carried alongside the request, never sent on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub auth: AuthMode,
    /// Bucket the resource must have configured (e.g. `queuepriority`).
    pub bucket: Option<String>,
    /// Whether a successful response may be served from the response cache.
    pub cacheable: bool,
}

/// Query params, headers, body and context of a request.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
    pub context: RequestContext,
}

impl RequestOptions {
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn auth(mut self, auth: AuthMode) -> Self {
        self.context.auth = auth;
        self
    }

    pub fn bucket(mut self, bucket: impl Into<String>) -> Self {
        self.context.bucket = Some(bucket.into());
        self
    }

    pub fn cacheable(mut self) -> Self {
        self.context.cacheable = true;
        self
    }
}

/// A fully described HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub options: RequestOptions,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>, options: RequestOptions) -> Self {
        Self {
            method,
            url: url.into(),
            options,
        }
    }

    pub fn get(url: impl Into<String>, options: RequestOptions) -> Self {
        Self::new(Method::Get, url, options)
    }

    pub fn post(url: impl Into<String>, options: RequestOptions) -> Self {
        Self::new(Method::Post, url, options)
    }

    pub fn delete(url: impl Into<String>, options: RequestOptions) -> Self {
        Self::new(Method::Delete, url, options)
    }

    /// URL including the percent-encoded query string.
    pub fn full_url(&self) -> String {
        if self.options.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .options
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url, query)
    }

    pub fn context(&self) -> &RequestContext {
        &self.options.context
    }

    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.options
            .headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Replace (or add) a header.
    pub fn set_header(&mut self, name: &str, value: String) {
        self.options
            .headers
            .retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.options.headers.push((name.to_string(), value));
    }
}

/// A successful HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, SdkError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Generic HTTP client.
///
/// Implementations return `Ok` only for 2xx responses. Every other status
/// must surface as [`HttpError::Status`] with the response body intact so the
/// classifier can inspect it.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    async fn get(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest::get(url, options)).await
    }

    async fn post(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest::post(url, options)).await
    }

    async fn delete(&self, url: &str, options: RequestOptions) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest::delete(url, options)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_url_encodes_query() {
        let request = HttpRequest::get(
            "https://data.cftools.cloud/v1/users/lookup",
            RequestOptions::default().query("identifier", "a b&c"),
        );
        assert_eq!(
            request.full_url(),
            "https://data.cftools.cloud/v1/users/lookup?identifier=a%20b%26c"
        );
    }

    #[test]
    fn test_full_url_without_query() {
        let request = HttpRequest::delete("https://x/v1/a", RequestOptions::default());
        assert_eq!(request.full_url(), "https://x/v1/a");
    }

    #[test]
    fn test_set_header_replaces_case_insensitively() {
        let mut request = HttpRequest::get(
            "https://x",
            RequestOptions::default().header("authorization", "Bearer old"),
        );
        request.set_header("Authorization", "Bearer new".to_string());
        assert_eq!(request.header("AUTHORIZATION"), Some("Bearer new"));
        assert_eq!(request.options.headers.len(), 1);
    }

    #[test]
    fn test_default_context_requires_auth() {
        let options = RequestOptions::default();
        assert_eq!(options.context.auth, AuthMode::Required);
        assert!(!options.context.cacheable);
        assert!(options.context.bucket.is_none());
    }
}
