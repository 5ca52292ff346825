//! Outgoing champion request description.
//!
//! The plugin never performs I/O itself: the controller emits a
//! [`ChampionRequest`] inside an action and the Zellij shim turns it into a host
//! web request. The request id travels in the web request context so the
//! response can be matched to the request that produced it.

use std::collections::BTreeMap;

/// Context key carrying the request id.
const REQUEST_ID_KEY: &str = "draftboard_request_id";

/// Context key carrying the issue time in Unix milliseconds.
const ISSUED_AT_KEY: &str = "draftboard_issued_at_ms";

/// A single HTTP GET for the champion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionRequest {
    /// Absolute URL of the champions endpoint.
    pub url: String,

    /// Identifier echoed back in the response context.
    pub request_id: u64,

    /// Unix timestamp in milliseconds when the request was issued.
    pub issued_at_ms: i64,
}

impl ChampionRequest {
    /// Creates a request stamped with the current time.
    ///
    /// The issue time doubles as the request id, which keeps ids distinct
    /// across plugin reloads within the same Zellij session.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        let issued_at_ms = chrono::Utc::now().timestamp_millis();
        Self {
            url: url.into(),
            request_id: u64::try_from(issued_at_ms).unwrap_or_default(),
            issued_at_ms,
        }
    }

    /// Headers sent with the request.
    #[must_use]
    pub fn headers() -> BTreeMap<String, String> {
        BTreeMap::from([("Accept".to_string(), "application/json".to_string())])
    }

    /// Encodes the request identity into a web request context map.
    #[must_use]
    pub fn to_context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (REQUEST_ID_KEY.to_string(), self.request_id.to_string()),
            (ISSUED_AT_KEY.to_string(), self.issued_at_ms.to_string()),
        ])
    }
}

/// Reads the request id back from a web request context.
///
/// Returns `None` for responses to requests this plugin did not issue.
#[must_use]
pub fn request_id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
    context.get(REQUEST_ID_KEY)?.parse().ok()
}

/// Milliseconds elapsed since the request in `context` was issued.
#[must_use]
pub fn latency_ms_from_context(context: &BTreeMap<String, String>) -> Option<i64> {
    let issued_at: i64 = context.get(ISSUED_AT_KEY)?.parse().ok()?;
    Some(chrono::Utc::now().timestamp_millis().saturating_sub(issued_at))
}
