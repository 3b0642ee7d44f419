//! Conversions from wire types to domain types for list entries.

use super::wire::ListEntryResponse;
use super::ListEntry;

impl From<ListEntryResponse> for ListEntry {
    fn from(e: ListEntryResponse) -> Self {
        Self {
            cftools_id: e.user.cftools_id,
            comment: e.meta.comment,
            created_at: e.created_at,
            updated_at: e.updated_at,
            expires_at: e.meta.expiration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::server_list::wire::ListEntriesResponse;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_entry_from_wire() {
        let resp: ListEntriesResponse = serde_json::from_str(
            r#"{
                "entries": [{
                    "created_at": "2021-05-01T10:00:00Z",
                    "updated_at": "2021-05-02T10:00:00Z",
                    "meta": {"comment": "supporter", "expiration": "2021-06-01T00:00:00Z", "from_api": true},
                    "user": {"cftools_id": "abc"}
                }]
            }"#,
        )
        .unwrap();

        let entry = ListEntry::from(resp.entries.into_iter().next().unwrap());

        assert_eq!(entry.cftools_id.as_str(), "abc");
        assert_eq!(entry.comment, "supporter");
        assert!(!entry.is_permanent());
        let expiry = Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap();
        assert!(entry.is_expired_at(expiry));
        assert!(!entry.is_expired_at(Utc.with_ymd_and_hms(2021, 5, 31, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_null_expiration_is_permanent() {
        let resp: ListEntriesResponse = serde_json::from_str(
            r#"{"entries": [{
                "created_at": "2021-05-01T10:00:00Z",
                "meta": {"comment": "", "expiration": null},
                "user": {"cftools_id": "abc"}
            }]}"#,
        )
        .unwrap();
        let entry = ListEntry::from(resp.entries[0].clone());
        assert!(entry.is_permanent());
        assert!(entry.updated_at.is_none());
    }
}
