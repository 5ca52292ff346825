//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a `Vec<Action>`
//! after each event and the plugin shim executes them in order, which keeps the
//! controller testable without a host.
//!
//! # Example
//!
//! ```rust
//! use draftboard::app::Action;
//! use draftboard::client::ChampionRequest;
//!
//! let actions = vec![Action::FetchChampions(ChampionRequest::new(
//!     "http://localhost:5000/api/champions",
//! ))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::client::ChampionRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Issues the HTTP GET for the champion list through the host.
    ///
    /// Emitted at most once per plugin instance.
    FetchChampions(ChampionRequest),

    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `Esc` with an empty query.
    CloseFocus,
}
