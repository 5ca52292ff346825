//! Champion loading lifecycle.

use crate::domain::Champion;

/// Lifecycle of the one champion fetch a plugin instance performs.
///
/// Starts as [`LoadState::Loading`] and moves exactly once to one of the two
/// terminal variants. There is no way back to `Loading`: retrying requires a
/// fresh plugin instance.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Waiting for the response. No data, no error.
    #[default]
    Loading,
    /// The backend returned the authoritative champion list.
    Ready(Vec<Champion>),
    /// Loading failed; carries the user-visible message.
    Failed(String),
}

impl LoadState {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the loaded champions, or `None` unless `Ready`.
    #[must_use]
    pub fn champions(&self) -> Option<&[Champion]> {
        match self {
            Self::Ready(champions) => Some(champions),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// Short label used in tracing fields.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }
}
