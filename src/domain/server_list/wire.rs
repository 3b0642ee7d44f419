//! Wire types for priority queue and whitelist requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::UserRef;
use crate::shared::CFToolsId;

/// Response of `GET /v1/server/{id}/{queuepriority|whitelist}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEntriesResponse {
    #[serde(default)]
    pub entries: Vec<ListEntryResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEntryResponse {
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub meta: ListEntryMeta,
    pub user: UserRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEntryMeta {
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,
}

/// Body of `POST /v1/server/{id}/{queuepriority|whitelist}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutListEntryBody {
    pub cftools_id: CFToolsId,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
