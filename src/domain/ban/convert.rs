//! Conversions from wire types to domain types for bans.

use super::wire::BanResponse;
use super::{Ban, BanTarget};
use crate::shared::{CFToolsId, IpAddress};

fn target(b: &BanResponse) -> BanTarget {
    if let Some(user) = &b.user {
        return BanTarget::Player(user.cftools_id.clone());
    }
    let identifier = b.identifier.clone().unwrap_or_default();
    match b.format.as_deref() {
        Some("cftools_id") => BanTarget::Player(CFToolsId::from(identifier)),
        Some("ipv4") | Some("ipv6") => match identifier.parse::<IpAddress>() {
            Ok(ip) => BanTarget::Ip(ip),
            Err(_) => BanTarget::Other(identifier),
        },
        _ => BanTarget::Other(identifier),
    }
}

impl From<BanResponse> for Ban {
    fn from(b: BanResponse) -> Self {
        Self {
            target: target(&b),
            id: b.id,
            reason: b.reason,
            status: b.status,
            created_at: b.created_at,
            expires_at: b.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ban::wire::BansResponse;

    fn parse(json: &str) -> Vec<Ban> {
        let resp: BansResponse = serde_json::from_str(json).unwrap();
        resp.entries.into_iter().map(Ban::from).collect()
    }

    #[test]
    fn test_player_ban_from_user_ref() {
        let bans = parse(
            r#"{"entries": [{
                "id": "ban-1", "reason": "cheating", "status": "active",
                "created_at": "2021-01-01T00:00:00Z", "expires_at": null,
                "user": {"cftools_id": "abc"}
            }]}"#,
        );
        assert_eq!(bans[0].target, BanTarget::Player(CFToolsId::from("abc")));
        assert!(bans[0].is_active());
        assert!(bans[0].is_permanent());
    }

    #[test]
    fn test_ip_ban_from_format_tag() {
        let bans = parse(
            r#"{"entries": [{
                "id": "ban-2", "reason": "vpn", "status": "inactive",
                "created_at": "2021-01-01T00:00:00Z", "expires_at": "2021-02-01T00:00:00Z",
                "format": "ipv4", "identifier": "10.0.0.1"
            }]}"#,
        );
        assert_eq!(bans[0].target, BanTarget::Ip("10.0.0.1".parse().unwrap()));
        assert!(!bans[0].is_active());
        assert!(!bans[0].is_permanent());
    }

    #[test]
    fn test_unknown_format_is_kept_raw() {
        let bans = parse(
            r#"{"entries": [{
                "id": "ban-3", "created_at": "2021-01-01T00:00:00Z",
                "format": "hwid", "identifier": "xyz"
            }]}"#,
        );
        assert_eq!(bans[0].target, BanTarget::Other("xyz".to_string()));
    }
}
