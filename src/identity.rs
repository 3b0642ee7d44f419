//! Identifier resolution — any [`GenericId`] to a canonical [`CFToolsId`].

use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::http::transport::{AuthMode, HttpRequest, RequestOptions};
use crate::http::ResilientExecutor;
use crate::shared::{CFToolsId, GenericId};

/// Notice the lookup endpoint returns after creating an account.
pub const ACCOUNT_CREATED_NOTICE: &str = "account-created";

/// Response of `GET /v1/users/lookup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub cftools_id: CFToolsId,
    #[serde(default)]
    pub notice: Option<String>,
}

/// Resolves player identifiers through the lookup endpoint.
#[derive(Clone)]
pub struct IdentifierResolver {
    executor: ResilientExecutor,
    lookup_url: String,
    create_missing_accounts: bool,
}

impl IdentifierResolver {
    pub fn new(executor: ResilientExecutor, base_url: &str) -> Self {
        Self {
            executor,
            lookup_url: format!("{}/v1/users/lookup", base_url.trim_end_matches('/')),
            create_missing_accounts: false,
        }
    }

    /// Create accounts for unknown Steam64 ids instead of failing.
    ///
    /// Only honored by the API for enterprise access.
    pub fn create_missing_accounts(mut self, enabled: bool) -> Self {
        self.create_missing_accounts = enabled;
        self
    }

    pub async fn resolve(&self, id: &GenericId) -> Result<CFToolsId, SdkError> {
        match id {
            GenericId::CFTools(id) => Ok(id.clone()),
            GenericId::Ip(ip) => Err(SdkError::Validation(format!(
                "IP address {} cannot be resolved to an account",
                ip
            ))),
            GenericId::Steam64(_) if self.create_missing_accounts => {
                match self.lookup(id, false).await {
                    Err(e) if e.is_not_found() => self.create(id).await,
                    other => other.map(|r| r.cftools_id),
                }
            }
            _ => self.lookup(id, false).await.map(|r| r.cftools_id),
        }
    }

    async fn create(&self, id: &GenericId) -> Result<CFToolsId, SdkError> {
        tracing::debug!(identifier = %id, "Unknown Steam64 id, creating account");
        let response = self.lookup(id, true).await?;
        match response.notice.as_deref() {
            Some(ACCOUNT_CREATED_NOTICE) => Ok(response.cftools_id),
            notice => Err(SdkError::AccountCreationFailed {
                identifier: id.raw(),
                notice: notice.unwrap_or_default().to_string(),
            }),
        }
    }

    async fn lookup(&self, id: &GenericId, create: bool) -> Result<LookupResponse, SdkError> {
        let mut options = RequestOptions::default()
            .auth(AuthMode::Optional)
            .query("identifier", id.raw());
        if create {
            options = options.query("create", "true");
        }
        self.executor
            .execute_json(HttpRequest::get(&self.lookup_url, options))
            .await
    }
}
