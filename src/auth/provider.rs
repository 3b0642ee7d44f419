//! Authorization providers — obtain, cache and invalidate bearer credentials.

use async_lock::{Mutex, RwLock};
use async_trait::async_trait;
use chrono::Utc;

use crate::auth::{Authorization, LoginCredentials, LoginResponse, ENTERPRISE_TOKEN_HEADER};
use crate::error::SdkError;
use crate::http::classify::classify_login;
use crate::http::transport::{AuthMode, RequestOptions, Transport};

/// Source of the credential attached to authenticated requests.
#[async_trait]
pub trait AuthorizationProvider: Send + Sync {
    /// Return a currently valid credential, logging in when none is cached.
    ///
    /// `None` means the client is anonymous.
    async fn provide(&self, transport: &dyn Transport) -> Result<Option<Authorization>, SdkError>;

    /// Drop the cached credential so the next `provide()` logs in again.
    async fn report_expired(&self);

    /// Whether a rejected credential can be replaced by a fresh one.
    fn can_refresh(&self) -> bool;
}

/// Provider that logs in with an application id and secret.
///
/// The enterprise variant sends an additional access token on login.
pub struct LoginAuthorizationProvider {
    login_url: String,
    credentials: LoginCredentials,
    enterprise_token: Option<String>,
    current: RwLock<Option<Authorization>>,
    /// Serializes login exchanges so concurrent misses share one login.
    login: Mutex<()>,
}

impl LoginAuthorizationProvider {
    pub fn new(base_url: &str, credentials: LoginCredentials) -> Self {
        Self {
            login_url: format!("{}/v1/auth/register", base_url.trim_end_matches('/')),
            credentials,
            enterprise_token: None,
            current: RwLock::new(None),
            login: Mutex::new(()),
        }
    }

    pub fn enterprise(
        base_url: &str,
        credentials: LoginCredentials,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            enterprise_token: Some(access_token.into()),
            ..Self::new(base_url, credentials)
        }
    }

    /// Seed the cache with a static token, skipping the first login.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        Self {
            current: RwLock::new(Some(Authorization::bearer(token, Utc::now()))),
            ..self
        }
    }

    pub fn is_enterprise(&self) -> bool {
        self.enterprise_token.is_some()
    }

    async fn cached(&self) -> Option<Authorization> {
        let now = Utc::now();
        self.current
            .read()
            .await
            .as_ref()
            .filter(|auth| auth.is_valid_at(now))
            .cloned()
    }

    async fn login(&self, transport: &dyn Transport) -> Result<Authorization, SdkError> {
        let mut options = RequestOptions::default()
            .auth(AuthMode::None)
            .json(serde_json::to_value(self.credentials.to_request())?);
        if let Some(token) = &self.enterprise_token {
            options = options.header(ENTERPRISE_TOKEN_HEADER, token.as_str());
        }

        tracing::debug!(
            enterprise = self.is_enterprise(),
            "Logging in to {}",
            self.login_url
        );

        let response = transport
            .post(&self.login_url, options)
            .await
            .map_err(classify_login)?;
        let login: LoginResponse = response.json()?;
        Ok(Authorization::bearer(login.token, Utc::now()))
    }
}

#[async_trait]
impl AuthorizationProvider for LoginAuthorizationProvider {
    async fn provide(&self, transport: &dyn Transport) -> Result<Option<Authorization>, SdkError> {
        if let Some(auth) = self.cached().await {
            return Ok(Some(auth));
        }

        let _guard = self.login.lock().await;
        // Another task may have logged in while we waited.
        if let Some(auth) = self.cached().await {
            return Ok(Some(auth));
        }

        let auth = self.login(transport).await?;
        *self.current.write().await = Some(auth.clone());
        Ok(Some(auth))
    }

    async fn report_expired(&self) {
        *self.current.write().await = None;
    }

    fn can_refresh(&self) -> bool {
        true
    }
}

/// Provider for clients without credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousAuthorizationProvider;

#[async_trait]
impl AuthorizationProvider for AnonymousAuthorizationProvider {
    async fn provide(&self, _transport: &dyn Transport) -> Result<Option<Authorization>, SdkError> {
        Ok(None)
    }

    async fn report_expired(&self) {}

    fn can_refresh(&self) -> bool {
        false
    }
}
