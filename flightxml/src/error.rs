//! Common error types for the flightxml crate.
//!
//! One centralized Error enum using thiserror. Every failure propagates to
//! the immediate caller; nothing is caught or retried internally, and no
//! partial results are produced.

use serde_json::Value;
use thiserror::Error;

/// Error-string prefixes the alert endpoints embed in otherwise successful
/// responses. `OVERLIMIT` means the account's enabled-alert cap was hit;
/// `FLOODWARN` means the new alert was predicted to exceed its `max_weekly`
/// budget.
pub const REMOTE_ERROR_PREFIXES: &[&str] = &["OVERLIMIT", "FLOODWARN"];

/// Main error type for flightxml operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The named remote method is deliberately not implemented by this
    /// client. Raised before any network activity; a feature gap, not a
    /// runtime condition.
    #[error("remote method {0} is not implemented by this client")]
    NotImplemented(&'static str),

    /// A value had the wrong shape for a converter.
    #[error("validation error: {0}")]
    Validation(String),

    /// The outbound request could not be completed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the supplied credentials.
    #[error("authentication rejected (HTTP {status})")]
    Auth { status: u16 },

    /// The response body was not JSON, or the result lacked an expected
    /// structure.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// An application-level failure reported by the server inside a
    /// well-formed response.
    #[error("remote error: {0}")]
    Remote(String),
}

impl Error {
    /// Detect an application-level failure embedded in a well-formed result.
    ///
    /// The service reports some rejections as bare strings with a
    /// recognizable prefix (see [`REMOTE_ERROR_PREFIXES`]) or as an object
    /// carrying an `error` key. [`crate::Client::invoke`] passes such values
    /// through unmodified, so inspecting them is the caller's move.
    pub fn remote_in(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if REMOTE_ERROR_PREFIXES.iter().any(|p| s.starts_with(p)) => {
                Some(Error::Remote(s.clone()))
            }
            Value::Object(map) => map
                .get("error")
                .and_then(Value::as_str)
                .map(|s| Error::Remote(s.to_string())),
            _ => None,
        }
    }
}

/// Convenience type alias for Results using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_prefixed_error_strings() {
        let value = json!("OVERLIMIT: too many enabled alerts");
        match Error::remote_in(&value) {
            Some(Error::Remote(msg)) => assert!(msg.starts_with("OVERLIMIT")),
            other => panic!("expected remote error, got {other:?}"),
        }
    }

    #[test]
    fn detects_error_key_in_objects() {
        let value = json!({"error": "no such airport"});
        assert!(matches!(Error::remote_in(&value), Some(Error::Remote(_))));
    }

    #[test]
    fn passes_ordinary_results() {
        assert!(Error::remote_in(&json!("FLOOD")).is_none());
        assert!(Error::remote_in(&json!([1, 2, 3])).is_none());
        assert!(Error::remote_in(&json!({"alerts": []})).is_none());
        assert!(Error::remote_in(&json!(42)).is_none());
    }
}
