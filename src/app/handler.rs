//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes user input and
//! host notifications, translating them into state changes and action
//! sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Lifecycle**: `Mount`, `Unmount`
//! - **Loading**: `ChampionsReceived`, `FetchUnavailable`
//! - **Input**: `Char`, `Backspace`, `Escape`, `Move`
//!
//! # Example
//!
//! ```rust
//! use draftboard::app::{handle_event, Action, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (_, actions) = handle_event(&mut state, &Event::Mount)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchChampions(_)]));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::navigation::Direction;
use crate::app::{Action, AppState};
use crate::client::{resolve_failure, resolve_response, ChampionRequest};
use crate::domain::error::{DraftError, Result};

/// Events triggered by user input or the plugin host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The draft screen became active; triggers the one champion fetch.
    Mount,

    /// The host delivered the response to a champion request.
    ChampionsReceived {
        /// Id recovered from the web request context.
        request_id: u64,
        /// HTTP status code, `0` when unknown.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// The request could not be made at all, e.g. web access was denied.
    FetchUnavailable {
        /// Cause, logged but never shown.
        reason: String,
    },

    /// The screen is going away; pending results must be dropped.
    Unmount,

    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears the query, or closes the pane when it is already empty.
    Escape,
    /// Moves the grid cursor.
    Move(Direction),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the screen needs a re-render.
///
/// After [`Event::Unmount`] every event is ignored, so a response that arrives
/// late never touches the state of a torn-down screen.
///
/// # Errors
///
/// Returns [`DraftError::UnknownRequest`] for a response whose id does not
/// match the outstanding request. The state is left untouched.
///
/// # Example
///
/// ```rust
/// use draftboard::app::{handle_event, AppState, Event};
///
/// let mut state = AppState::default();
/// let (render, actions) = handle_event(&mut state, &Event::Char('a'))?;
/// assert!(render);
/// assert!(actions.is_empty());
/// assert_eq!(state.query, "a");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    if !state.mounted {
        tracing::debug!("screen unmounted, ignoring event");
        return Ok((false, vec![]));
    }

    match event {
        Event::Mount => {
            if state.fetch_issued {
                tracing::debug!("champion fetch already issued");
                return Ok((false, vec![]));
            }

            let request = ChampionRequest::new(state.endpoint.clone());
            tracing::info!(
                url = %request.url,
                request_id = request.request_id,
                "requesting champion list"
            );
            state.fetch_issued = true;
            state.pending_request = Some(request.request_id);
            Ok((true, vec![Action::FetchChampions(request)]))
        }
        Event::ChampionsReceived { request_id, status, body } => {
            if state.pending_request != Some(*request_id) {
                return Err(DraftError::UnknownRequest(*request_id));
            }

            let outcome = resolve_response(*status, body);
            Ok((state.resolve(outcome), vec![]))
        }
        Event::FetchUnavailable { reason } => {
            state.fetch_issued = true;
            let outcome = resolve_failure(&DraftError::Transport(reason.clone()));
            Ok((state.resolve(outcome), vec![]))
        }
        Event::Unmount => {
            tracing::debug!(
                pending_request = ?state.pending_request,
                load_state = state.load_state.label(),
                "unmounting draft screen"
            );
            state.mounted = false;
            state.pending_request = None;
            Ok((false, vec![]))
        }
        Event::Char(c) => {
            state.query.push(*c);
            tracing::trace!(query = %state.query, char = %c, "search query updated");
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Escape => {
            if state.query.is_empty() {
                return Ok((false, vec![Action::CloseFocus]));
            }
            state.query.clear();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::Move(direction) => {
            if state.visible.is_empty() {
                return Ok((false, vec![]));
            }
            state.move_selection(*direction);
            Ok((true, vec![]))
        }
    }
}

/// Short event label for spans; avoids logging whole response bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Mount => "mount",
        Event::ChampionsReceived { .. } => "champions_received",
        Event::FetchUnavailable { .. } => "fetch_unavailable",
        Event::Unmount => "unmount",
        Event::Char(_) => "char",
        Event::Backspace => "backspace",
        Event::Escape => "escape",
        Event::Move(_) => "move",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LoadState, LOAD_FAILURE_MESSAGE};

    const BODY: &[u8] = br#"{"success":true,"champions":[
        {"champion_id":"Aatrox","name":"Aatrox","icon_url":"https://cdn/Aatrox.png"},
        {"champion_id":"Ahri","name":"Ahri","icon_url":"https://cdn/Ahri.png"}
    ]}"#;

    fn mounted() -> (AppState, u64) {
        let mut state = AppState::default();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        let [Action::FetchChampions(request)] = actions.as_slice() else {
            panic!("expected a single fetch, got {actions:?}");
        };
        let id = request.request_id;
        (state, id)
    }

    fn received(request_id: u64, body: &[u8]) -> Event {
        Event::ChampionsReceived { request_id, status: 200, body: body.to_vec() }
    }

    #[test]
    fn mount_fetches_once() {
        let (mut state, _) = mounted();
        assert!(state.fetch_issued);
        assert!(state.load_state.is_loading());

        let (render, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn mount_uses_configured_endpoint() {
        let mut state = AppState::default();
        state.endpoint = "http://draft.local/api/champions".into();
        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        assert!(matches!(
            actions.as_slice(),
            [Action::FetchChampions(r)] if r.url == "http://draft.local/api/champions"
        ));
    }

    #[test]
    fn response_resolves_to_ready() {
        let (mut state, id) = mounted();
        let (render, _) = handle_event(&mut state, &received(id, BODY)).unwrap();
        assert!(render);
        assert_eq!(state.load_state.champions().map(<[_]>::len), Some(2));
        assert_eq!(state.visible, [0, 1]);
        assert_eq!(state.pending_request, None);
    }

    #[test]
    fn rejected_response_fails() {
        let (mut state, id) = mounted();
        handle_event(&mut state, &received(id, br#"{"success":false}"#)).unwrap();
        assert_eq!(state.load_state, LoadState::Failed(LOAD_FAILURE_MESSAGE.into()));
    }

    #[test]
    fn foreign_response_is_rejected() {
        let (mut state, id) = mounted();
        let err = handle_event(&mut state, &received(id + 1, BODY)).unwrap_err();
        assert!(matches!(err, DraftError::UnknownRequest(_)));
        assert!(state.load_state.is_loading());
    }

    #[test]
    fn duplicate_response_is_rejected() {
        let (mut state, id) = mounted();
        handle_event(&mut state, &received(id, BODY)).unwrap();
        assert!(handle_event(&mut state, &received(id, b"{}")).is_err());
        assert!(matches!(state.load_state, LoadState::Ready(_)));
    }

    #[test]
    fn unavailable_fetch_fails() {
        let mut state = AppState::default();
        let event = Event::FetchUnavailable { reason: "web access denied".into() };
        let (render, _) = handle_event(&mut state, &event).unwrap();
        assert!(render);
        assert_eq!(state.load_state, LoadState::Failed(LOAD_FAILURE_MESSAGE.into()));

        let (_, actions) = handle_event(&mut state, &Event::Mount).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn late_response_after_unmount_is_ignored() {
        let (mut state, id) = mounted();
        handle_event(&mut state, &Event::Unmount).unwrap();

        let (render, actions) = handle_event(&mut state, &received(id, BODY)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.load_state.is_loading());
        assert!(!state.mounted);
    }

    #[test]
    fn typing_filters_and_backspace_restores() {
        let (mut state, id) = mounted();
        handle_event(&mut state, &received(id, BODY)).unwrap();

        for c in "AHR".chars() {
            handle_event(&mut state, &Event::Char(c)).unwrap();
        }
        assert_eq!(state.visible, [1]);

        handle_event(&mut state, &Event::Backspace).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.query, "A");
        assert_eq!(state.visible, [0, 1]);
    }

    #[test]
    fn backspace_on_empty_query_does_nothing() {
        let mut state = AppState::default();
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn escape_clears_then_closes() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Char('x')).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert!(state.query.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(actions, [Action::CloseFocus]);
    }

    #[test]
    fn moves_need_visible_tiles() {
        let mut state = AppState::default();
        let (render, _) = handle_event(&mut state, &Event::Move(Direction::Right)).unwrap();
        assert!(!render);

        let (mut state, id) = mounted();
        handle_event(&mut state, &received(id, BODY)).unwrap();
        handle_event(&mut state, &Event::Move(Direction::Right)).unwrap();
        assert_eq!(state.selected_champion().map(|c| c.id.as_str()), Some("Ahri"));
    }
}
