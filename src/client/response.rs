//! Champion response parsing and outcome classification.
//!
//! Three failure causes are distinguished internally (transport, malformed body,
//! backend-reported failure) and logged with their details, then collapsed into
//! one user-visible [`LoadState::Failed`] message.

use crate::domain::{Champion, DraftError, LoadState, Result, LOAD_FAILURE_MESSAGE};
use serde_json::Value;
use std::collections::HashSet;

/// Maximum number of body characters included in failure logs.
const BODY_PREVIEW_CHARS: usize = 200;

/// Parses a response body into the champion list.
///
/// The body is parsed regardless of HTTP status. A body that is not JSON is
/// reported as a transport failure when the status is not 2xx (the host puts
/// its error text in the body) and as a malformed response otherwise.
///
/// # Errors
///
/// - [`DraftError::Transport`] for non-2xx statuses with non-JSON bodies
/// - [`DraftError::MalformedResponse`] for bodies that are not JSON, or whose
///   `champions` value is not a list of champions
/// - [`DraftError::Rejected`] when the body is not an object or its `success`
///   is not the boolean `true`
/// - [`DraftError::MissingChampions`] when `success` is `true` but `champions`
///   is absent or `null`
pub fn parse_champions(status: u16, body: &[u8]) -> Result<Vec<Champion>> {
    let document: Value = match serde_json::from_slice(body) {
        Ok(document) => document,
        Err(_) if !(200..300).contains(&status) => {
            return Err(DraftError::Transport(format!(
                "HTTP status {status}: {}",
                body_preview(body)
            )));
        }
        Err(e) => return Err(e.into()),
    };

    let Value::Object(mut fields) = document else {
        return Err(DraftError::Rejected);
    };
    if fields.get("success") != Some(&Value::Bool(true)) {
        return Err(DraftError::Rejected);
    }

    match fields.remove("champions") {
        None | Some(Value::Null) => Err(DraftError::MissingChampions),
        Some(champions) => Ok(serde_json::from_value(champions)?),
    }
}

/// Classifies a response into the terminal [`LoadState`].
///
/// # Tracing
///
/// Emits a debug event with the champion count on success and a warning with
/// the failure cause and a body preview otherwise.
///
/// # Examples
///
/// ```
/// use draftboard::client::resolve_response;
/// use draftboard::domain::LoadState;
///
/// let state = resolve_response(200, br#"{"success": false}"#);
/// assert_eq!(state, LoadState::Failed("Failed to load champions".to_string()));
/// ```
#[must_use]
pub fn resolve_response(status: u16, body: &[u8]) -> LoadState {
    let _span = tracing::debug_span!("resolve_response", status, body_len = body.len()).entered();

    match parse_champions(status, body) {
        Ok(champions) => {
            warn_on_duplicate_ids(&champions);
            tracing::debug!(champion_count = champions.len(), "champions loaded");
            LoadState::Ready(champions)
        }
        Err(e) => {
            tracing::warn!(error = %e, body_preview = %body_preview(body), "champion load failed");
            LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string())
        }
    }
}

/// Classifies a request that could not be issued or completed.
#[must_use]
pub fn resolve_failure(error: &DraftError) -> LoadState {
    tracing::warn!(error = %error, "champion load failed before a response arrived");
    LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string())
}

/// Tiles are keyed by id; duplicates are kept verbatim but reported.
fn warn_on_duplicate_ids(champions: &[Champion]) {
    let mut seen = HashSet::with_capacity(champions.len());
    let duplicates: Vec<&str> = champions
        .iter()
        .filter(|c| !seen.insert(c.id.as_str()))
        .map(|c| c.id.as_str())
        .collect();

    if !duplicates.is_empty() {
        tracing::warn!(duplicates = ?duplicates, "champion ids are not unique");
    }
}

fn body_preview(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(BODY_PREVIEW_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CHAMPIONS: &str = r#"{
        "success": true,
        "champions": [
            {"champion_id": "Aatrox", "name": "Aatrox", "icon_url": "u1"},
            {"champion_id": "Ahri", "name": "Ahri", "icon_url": "u2"}
        ]
    }"#;

    fn failed() -> LoadState {
        LoadState::Failed(LOAD_FAILURE_MESSAGE.to_string())
    }

    #[test]
    fn success_keeps_champions_verbatim() {
        let state = resolve_response(200, TWO_CHAMPIONS.as_bytes());
        assert_eq!(
            state,
            LoadState::Ready(vec![
                Champion::new("Aatrox", "Aatrox", "u1"),
                Champion::new("Ahri", "Ahri", "u2"),
            ])
        );
    }

    #[test]
    fn empty_list_is_ready() {
        let state = resolve_response(200, br#"{"success": true, "champions": []}"#);
        assert_eq!(state, LoadState::Ready(vec![]));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let body = br#"{"success": true, "count": 1, "champions": [
            {"champion_id": "Ahri", "name": "Ahri", "icon_url": "u", "title": "the Nine-Tailed Fox"}
        ]}"#;
        assert!(matches!(resolve_response(200, body), LoadState::Ready(c) if c.len() == 1));
    }

    #[test]
    fn every_failure_collapses_to_one_message() {
        assert_eq!(resolve_response(200, br#"{"success": false}"#), failed());
        assert_eq!(resolve_response(200, br#"{"champions": []}"#), failed());
        assert_eq!(resolve_response(200, br#"{"success": "true", "champions": []}"#), failed());
        assert_eq!(resolve_response(200, b"<html>oops</html>"), failed());
        assert_eq!(resolve_response(200, b""), failed());
        assert_eq!(resolve_response(400, b"error sending request: connection refused"), failed());
        assert_eq!(resolve_response(500, br#"{"error": "boom"}"#), failed());
    }

    #[test]
    fn failure_causes_stay_distinct_internally() {
        assert!(matches!(parse_champions(200, b"not json"), Err(DraftError::MalformedResponse(_))));
        assert!(matches!(parse_champions(502, b"bad gateway"), Err(DraftError::Transport(msg)) if msg.contains("502")));
        assert!(matches!(parse_champions(200, br#"{"success": false}"#), Err(DraftError::Rejected)));
        assert!(matches!(parse_champions(200, br#"{"success": true}"#), Err(DraftError::MissingChampions)));
    }

    #[test]
    fn only_an_object_can_report_success() {
        assert_eq!(resolve_response(200, br#"[true, []]"#), failed());
        assert_eq!(resolve_response(200, b"true"), failed());
        assert!(matches!(parse_champions(200, br#"[true, []]"#), Err(DraftError::Rejected)));
        assert!(matches!(
            parse_champions(200, br#"{"success": 1, "champions": []}"#),
            Err(DraftError::Rejected)
        ));
        assert!(matches!(
            parse_champions(200, br#"{"success": true, "champions": null}"#),
            Err(DraftError::MissingChampions)
        ));
    }

    #[test]
    fn entry_without_icon_still_loads() {
        let body = br#"{"success": true, "champions": [
            {"champion_id": "Ahri", "name": "Ahri", "icon_url": "https://cdn/Ahri.png"},
            {"champion_id": "Zed", "name": "Zed"}
        ]}"#;
        assert_eq!(
            resolve_response(200, body),
            LoadState::Ready(vec![
                Champion::new("Ahri", "Ahri", "https://cdn/Ahri.png"),
                Champion::new("Zed", "Zed", ""),
            ])
        );
    }

    #[test]
    fn champions_that_are_not_a_list_are_malformed() {
        assert!(matches!(
            parse_champions(200, br#"{"success": true, "champions": {"Ahri": {}}}"#),
            Err(DraftError::MalformedResponse(_))
        ));
    }

    #[test]
    fn success_body_wins_over_status() {
        let champions = parse_champions(500, TWO_CHAMPIONS.as_bytes()).unwrap();
        assert_eq!(champions.len(), 2);
    }

    #[test]
    fn duplicates_are_kept() {
        let body = br#"{"success": true, "champions": [
            {"champion_id": "Ahri", "name": "Ahri", "icon_url": "u"},
            {"champion_id": "Ahri", "name": "Ahri", "icon_url": "u"}
        ]}"#;
        assert!(matches!(resolve_response(200, body), LoadState::Ready(c) if c.len() == 2));
    }

    #[test]
    fn failures_before_response_are_generic() {
        let state = resolve_failure(&DraftError::Transport("web access denied".into()));
        assert_eq!(state, failed());
    }
}
