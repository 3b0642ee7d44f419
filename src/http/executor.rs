//! Resilient request executor — credential attach, classification, and the
//! refresh-once-and-retry protocol.
//!
//! ```text
//! Requesting ──ok──────────────────────────────▶ Success
//!     │ TokenExpired (provider can refresh)
//!     ▼
//! Refreshing ──report_expired + provide──▶ Retrying ──▶ Success | Failed
//!     any other failure ───────────────────────────▶ Failed
//! ```
//!
//! The retry budget is exactly one: the outcome of `Retrying` is final, even
//! when it is another `TokenExpired`.

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::auth::{Authorization, AuthorizationProvider};
use crate::cache::ResponseCache;
use crate::error::{AuthError, SdkError};
use crate::http::classify::classify;
use crate::http::transport::{AuthMode, HttpRequest, HttpResponse, Method, Transport};

enum Phase {
    Requesting,
    Refreshing,
    Retrying(Option<Authorization>),
}

/// Issues requests on behalf of every SDK operation.
#[derive(Clone)]
pub struct ResilientExecutor {
    transport: Arc<dyn Transport>,
    authorization: Arc<dyn AuthorizationProvider>,
    cache: Option<Arc<ResponseCache>>,
}

impl ResilientExecutor {
    pub fn new(transport: Arc<dyn Transport>, authorization: Arc<dyn AuthorizationProvider>) -> Self {
        Self {
            transport,
            authorization,
            cache: None,
        }
    }

    pub fn with_cache(mut self, cache: Arc<ResponseCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    pub fn cache(&self) -> Option<&ResponseCache> {
        self.cache.as_deref()
    }

    /// Execute `request`, refreshing the credential and retrying once if the
    /// API reports it expired.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, SdkError> {
        let cache_key = self.cache_key(&request);
        if let (Some(cache), Some(key)) = (&self.cache, &cache_key) {
            if let Some(body) = cache.get(key).await {
                tracing::debug!(url = %key, "Serving response from cache");
                return Ok(HttpResponse::new(200, body));
            }
        }

        let generation = match (&self.cache, &cache_key) {
            (Some(cache), Some(_)) => Some(cache.generation().await),
            _ => None,
        };

        let response = self.execute_uncached(&request).await?;

        if let (Some(cache), Some(key), Some(generation)) = (&self.cache, cache_key, generation) {
            if !cache.insert_if_current(key, response.body.clone(), generation).await {
                tracing::debug!(url = %request.url, "Cache invalidated during request, not storing");
            }
        }
        Ok(response)
    }

    /// Execute and decode the JSON body.
    pub async fn execute_json<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, SdkError> {
        self.execute(request).await?.json()
    }

    /// Execute and discard the body.
    pub async fn execute_empty(&self, request: HttpRequest) -> Result<(), SdkError> {
        self.execute(request).await.map(|_| ())
    }

    async fn execute_uncached(&self, request: &HttpRequest) -> Result<HttpResponse, SdkError> {
        let mut phase = Phase::Requesting;
        loop {
            phase = match phase {
                Phase::Requesting => {
                    let authorization = self.current_authorization(request).await?;
                    match self.attempt(request, authorization).await {
                        Ok(response) => return Ok(response),
                        Err(e) if e.is_token_expired() && self.authorization.can_refresh() => {
                            tracing::warn!(
                                url = %request.url,
                                "Authorization expired, refreshing and retrying once"
                            );
                            Phase::Refreshing
                        }
                        Err(e) => return Err(e),
                    }
                }
                Phase::Refreshing => {
                    self.authorization.report_expired().await;
                    Phase::Retrying(self.current_authorization(request).await?)
                }
                Phase::Retrying(authorization) => {
                    return self.attempt(request, authorization).await;
                }
            };
        }
    }

    async fn current_authorization(
        &self,
        request: &HttpRequest,
    ) -> Result<Option<Authorization>, SdkError> {
        match request.context().auth {
            AuthMode::None => Ok(None),
            AuthMode::Optional => self.authorization.provide(self.transport.as_ref()).await,
            AuthMode::Required => match self.authorization.provide(self.transport.as_ref()).await? {
                Some(auth) => Ok(Some(auth)),
                None => Err(AuthError::AuthenticationRequired.into()),
            },
        }
    }

    async fn attempt(
        &self,
        request: &HttpRequest,
        authorization: Option<Authorization>,
    ) -> Result<HttpResponse, SdkError> {
        let mut outgoing = request.clone();
        if let Some(auth) = &authorization {
            outgoing.set_header("Authorization", auth.header_value());
        }

        self.transport
            .send(outgoing)
            .await
            .map_err(|e| classify(e, authorization.as_ref(), request.context()))
    }

    fn cache_key(&self, request: &HttpRequest) -> Option<String> {
        if self.cache.is_some() && request.method == Method::Get && request.context().cacheable {
            Some(request.full_url())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AnonymousAuthorizationProvider, LoginAuthorizationProvider, LoginCredentials};
    use crate::error::{ApiError, HttpError};
    use crate::http::testing::ScriptedTransport;
    use crate::http::transport::RequestOptions;
    use std::time::Duration;

    const BASE: &str = "https://data.cftools.cloud";

    fn executor(transport: &Arc<ScriptedTransport>) -> ResilientExecutor {
        let provider = LoginAuthorizationProvider::new(BASE, LoginCredentials::new("app", "secret"));
        ResilientExecutor::new(transport.clone(), Arc::new(provider))
    }

    fn request() -> HttpRequest {
        HttpRequest::get(
            format!("{BASE}/v1/server/sid/GSM/list"),
            RequestOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_attaches_bearer_credential() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(r#"{"token": "T1"}"#);
        transport.push_ok(r#"{"sessions": []}"#);

        let response = executor(&transport).execute(request()).await.unwrap();

        assert_eq!(response.body, r#"{"sessions": []}"#);
        assert_eq!(transport.request(1).header("Authorization"), Some("Bearer T1"));
    }

    #[tokio::test]
    async fn test_retries_once_after_token_expiry() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(r#"{"token": "T1"}"#);
        transport.push_api_error(403, "expired-token");
        transport.push_ok(r#"{"token": "T2"}"#);
        transport.push_ok(r#"{"sessions": []}"#);

        let response = executor(&transport).execute(request()).await.unwrap();

        assert_eq!(response.body, r#"{"sessions": []}"#);
        // login, request, login, retry
        assert_eq!(transport.call_count(), 4);
        assert_eq!(transport.request(1).header("Authorization"), Some("Bearer T1"));
        assert_eq!(transport.request(3).header("Authorization"), Some("Bearer T2"));
        assert_eq!(transport.request(3).full_url(), transport.request(1).full_url());
    }

    #[tokio::test]
    async fn test_second_expiry_is_not_retried() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(r#"{"token": "T1"}"#);
        transport.push_api_error(403, "expired-token");
        transport.push_ok(r#"{"token": "T2"}"#);
        transport.push_api_error(403, "expired-token");

        let err = executor(&transport).execute(request()).await.unwrap_err();

        match err {
            SdkError::Api(ApiError::TokenExpired { authorization, .. }) => {
                assert_eq!(authorization.map(|a| a.token().to_string()), Some("T2".to_string()));
            }
            other => panic!("expected TokenExpired, got {other:?}"),
        }
        assert_eq!(transport.call_count(), 4);
    }

    #[tokio::test]
    async fn test_retry_failure_is_classified_independently() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(r#"{"token": "T1"}"#);
        transport.push_api_error(403, "expired-token");
        transport.push_ok(r#"{"token": "T2"}"#);
        transport.push_api_error(403, "no-grant");

        let err = executor(&transport).execute(request()).await.unwrap_err();

        assert!(matches!(err, SdkError::Api(ApiError::GrantRequired { .. })));
        assert_eq!(transport.call_count(), 4);
    }

    #[tokio::test]
    async fn test_other_errors_are_not_retried() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(r#"{"token": "T1"}"#);
        transport.push_api_error(403, "no-grant");

        let err = executor(&transport).execute(request()).await.unwrap_err();

        assert!(matches!(err, SdkError::Api(ApiError::GrantRequired { .. })));
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_unclassified_failure_passes_through() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(r#"{"token": "T1"}"#);
        transport.push_status(502, "Bad Gateway");

        let err = executor(&transport).execute(request()).await.unwrap_err();

        assert!(matches!(err, SdkError::Http(HttpError::Status { status: 502, .. })));
    }

    #[tokio::test]
    async fn test_refresh_failure_propagates() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(r#"{"token": "T1"}"#);
        transport.push_api_error(403, "expired-token");
        transport.push_status(403, r#"{"status": false, "error": "bad-secret"}"#);

        let err = executor(&transport).execute(request()).await.unwrap_err();

        assert!(matches!(err, SdkError::Auth(AuthError::InvalidCredentials { .. })));
        assert_eq!(transport.call_count(), 3);
    }

    #[tokio::test]
    async fn test_anonymous_client_requires_authentication() {
        let transport = Arc::new(ScriptedTransport::new());
        let executor = ResilientExecutor::new(transport.clone(), Arc::new(AnonymousAuthorizationProvider));

        let err = executor.execute(request()).await.unwrap_err();

        assert!(matches!(err, SdkError::Auth(AuthError::AuthenticationRequired)));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_anonymous_expiry_surfaces_without_refresh() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_api_error(403, "expired-token");
        let executor = ResilientExecutor::new(transport.clone(), Arc::new(AnonymousAuthorizationProvider));
        let request = HttpRequest::get(
            format!("{BASE}/v1/users/lookup"),
            RequestOptions::default().auth(AuthMode::Optional),
        );

        let err = executor.execute(request).await.unwrap_err();

        assert!(err.is_token_expired());
        assert_eq!(transport.call_count(), 1);
        assert!(transport.request(0).header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_cacheable_get_is_served_from_cache() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(r#"{"token": "T1"}"#);
        transport.push_ok(r#"{"sessions": []}"#);
        let executor = executor(&transport)
            .with_cache(Arc::new(ResponseCache::new(Duration::from_secs(60))));
        let cacheable = HttpRequest::get(
            format!("{BASE}/v1/server/sid/GSM/list"),
            RequestOptions::default().cacheable(),
        );

        let first = executor.execute(cacheable.clone()).await.unwrap();
        let second = executor.execute(cacheable).await.unwrap();

        assert_eq!(first.body, second.body);
        assert_eq!(transport.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.push_ok(r#"{"token": "T1"}"#);
        transport.push_api_error(404, "not-found");
        transport.push_ok(r#"{"sessions": []}"#);
        let executor = executor(&transport)
            .with_cache(Arc::new(ResponseCache::new(Duration::from_secs(60))));
        let cacheable = HttpRequest::get(
            format!("{BASE}/v1/server/sid/GSM/list"),
            RequestOptions::default().cacheable(),
        );

        assert!(executor.execute(cacheable.clone()).await.unwrap_err().is_not_found());
        assert!(executor.execute(cacheable).await.is_ok());
        assert_eq!(transport.call_count(), 3);
    }

    /// Transport whose responses race with a mutation that drops the cache.
    struct InvalidatingTransport {
        cache: Arc<ResponseCache>,
        calls: std::sync::Mutex<usize>,
    }

    #[async_trait::async_trait]
    impl Transport for InvalidatingTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
            *self.calls.lock().unwrap() += 1;
            self.cache.invalidate_prefix(&request.url).await;
            Ok(HttpResponse::new(200, r#"{"entries": []}"#))
        }
    }

    #[tokio::test]
    async fn test_response_racing_invalidation_is_not_cached() {
        let cache = Arc::new(ResponseCache::new(Duration::from_secs(60)));
        let transport = Arc::new(InvalidatingTransport {
            cache: cache.clone(),
            calls: std::sync::Mutex::new(0),
        });
        let executor = ResilientExecutor::new(transport.clone(), Arc::new(AnonymousAuthorizationProvider))
            .with_cache(cache.clone());
        let cacheable = HttpRequest::get(
            format!("{BASE}/v1/server/sid/whitelist"),
            RequestOptions::default().auth(AuthMode::None).cacheable(),
        );

        executor.execute(cacheable.clone()).await.unwrap();
        executor.execute(cacheable.clone()).await.unwrap();

        assert_eq!(*transport.calls.lock().unwrap(), 2);
        assert!(cache.get(&cacheable.full_url()).await.is_none());
    }
}
