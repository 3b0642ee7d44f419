//! Error classification — failed exchanges to typed errors.
//!
//! A failure is classified only when both the status code and the `error`
//! tag of the JSON body match a known pair. Anything else is returned as the
//! raw [`HttpError`].

use serde::Deserialize;

use crate::auth::Authorization;
use crate::error::{ApiError, AuthError, HttpError, SdkError};
use crate::http::transport::RequestContext;

/// Error body returned by the data API.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub status: Option<bool>,
    pub error: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Map a failed request to its typed error.
///
/// `authorization` is the credential the failed attempt was sent with; it is
/// attached to `TokenExpired` so callers can see which token went stale.
pub fn classify(
    error: HttpError,
    authorization: Option<&Authorization>,
    context: &RequestContext,
) -> SdkError {
    let HttpError::Status { status, url, body } = &error else {
        return error.into();
    };
    let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) else {
        return error.into();
    };
    let url = url.clone();

    let classified = match (*status, parsed.error.as_str()) {
        (404, "not-found") => ApiError::ResourceNotFound { url },
        (404, "invalid-bucket") => ApiError::ResourceNotConfigured {
            url,
            bucket: context.bucket.clone(),
        },
        (429, "rate-limited") => ApiError::RequestLimitExceeded { url },
        (400, "duplicate") => ApiError::DuplicateResourceCreation { url },
        (403, "no-grant") => ApiError::GrantRequired { url },
        (403, "expired-token") => ApiError::TokenExpired {
            url,
            authorization: authorization.cloned(),
        },
        (500, "unexpected-error") => ApiError::UnknownError {
            url,
            request_id: parsed.request_id,
        },
        (500, "timeout") => ApiError::Timeout { url },
        (500, "system-unavailable") => ApiError::ServiceUnavailable { url },
        _ => return error.into(),
    };
    classified.into()
}

/// Map a failed login exchange.
pub fn classify_login(error: HttpError) -> SdkError {
    match error {
        HttpError::Status {
            status: 403 | 500,
            url,
            ..
        } => AuthError::InvalidCredentials { url }.into(),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    const URL: &str = "https://data.cftools.cloud/v1/server/sid/queuepriority";

    fn failure(status: u16, tag: &str) -> HttpError {
        HttpError::Status {
            status,
            url: URL.to_string(),
            body: serde_json::json!({"status": false, "error": tag, "request_id": "req-1"})
                .to_string(),
        }
    }

    fn run(status: u16, tag: &str) -> SdkError {
        classify(failure(status, tag), None, &RequestContext::default())
    }

    #[test]
    fn test_classifies_every_known_pair() {
        assert!(matches!(run(404, "not-found"), SdkError::Api(ApiError::ResourceNotFound { .. })));
        assert!(matches!(
            run(404, "invalid-bucket"),
            SdkError::Api(ApiError::ResourceNotConfigured { .. })
        ));
        assert!(matches!(
            run(429, "rate-limited"),
            SdkError::Api(ApiError::RequestLimitExceeded { .. })
        ));
        assert!(matches!(
            run(400, "duplicate"),
            SdkError::Api(ApiError::DuplicateResourceCreation { .. })
        ));
        assert!(matches!(run(403, "no-grant"), SdkError::Api(ApiError::GrantRequired { .. })));
        assert!(matches!(
            run(403, "expired-token"),
            SdkError::Api(ApiError::TokenExpired { .. })
        ));
        assert!(matches!(
            run(500, "unexpected-error"),
            SdkError::Api(ApiError::UnknownError { .. })
        ));
        assert!(matches!(run(500, "timeout"), SdkError::Api(ApiError::Timeout { .. })));
        assert!(matches!(
            run(500, "system-unavailable"),
            SdkError::Api(ApiError::ServiceUnavailable { .. })
        ));
    }

    #[test]
    fn test_status_and_tag_must_both_match() {
        // Known tags under a neighboring status are not classified.
        for (status, tag) in [
            (403, "not-found"),
            (404, "expired-token"),
            (500, "no-grant"),
            (429, "timeout"),
            (400, "rate-limited"),
            (403, "duplicate"),
        ] {
            assert!(
                matches!(run(status, tag), SdkError::Http(HttpError::Status { .. })),
                "({status}, {tag}) must pass through"
            );
        }
    }

    #[test]
    fn test_unknown_tag_passes_through() {
        let err = run(404, "something-else");
        match err {
            SdkError::Http(HttpError::Status { status, url, .. }) => {
                assert_eq!(status, 404);
                assert_eq!(url, URL);
            }
            other => panic!("expected pass-through, got {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_body_passes_through() {
        let err = classify(
            HttpError::Status {
                status: 404,
                url: URL.to_string(),
                body: "<html>not found</html>".to_string(),
            },
            None,
            &RequestContext::default(),
        );
        assert!(matches!(err, SdkError::Http(HttpError::Status { status: 404, .. })));
    }

    #[test]
    fn test_carries_diagnostics() {
        let context = RequestContext {
            bucket: Some("whitelist".to_string()),
            ..Default::default()
        };
        match classify(failure(404, "invalid-bucket"), None, &context) {
            SdkError::Api(ApiError::ResourceNotConfigured { url, bucket }) => {
                assert_eq!(url, URL);
                assert_eq!(bucket.as_deref(), Some("whitelist"));
            }
            other => panic!("unexpected {other:?}"),
        }

        match run(404, "invalid-bucket") {
            SdkError::Api(ApiError::ResourceNotConfigured { bucket, .. }) => {
                assert!(bucket.is_none());
            }
            other => panic!("unexpected {other:?}"),
        }

        match run(500, "unexpected-error") {
            SdkError::Api(ApiError::UnknownError { request_id, .. }) => {
                assert_eq!(request_id.as_deref(), Some("req-1"));
            }
            other => panic!("unexpected {other:?}"),
        }

        let stale = Authorization::bearer("T1", Utc::now());
        match classify(failure(403, "expired-token"), Some(&stale), &context) {
            SdkError::Api(ApiError::TokenExpired { authorization, url }) => {
                assert_eq!(authorization.as_ref().map(|a| a.token()), Some("T1"));
                assert_eq!(url, URL);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_login_classification() {
        for status in [403, 500] {
            assert!(matches!(
                classify_login(failure(status, "anything")),
                SdkError::Auth(AuthError::InvalidCredentials { .. })
            ));
        }
        assert!(matches!(
            classify_login(failure(429, "rate-limited")),
            SdkError::Http(HttpError::Status { status: 429, .. })
        ));
    }
}
