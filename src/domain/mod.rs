//! Domain layer for the Draftboard plugin.
//!
//! This module contains the core domain types and pure logic of the plugin,
//! independent of Zellij-specific APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`champion`]: Champion record as delivered by the backend
//! - [`load_state`]: Tri-state lifecycle of the champion fetch
//! - [`filter`]: Case-insensitive live filtering of the champion list
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use draftboard::domain::{filter, Champion, LoadState};
//!
//! let state = LoadState::Ready(vec![Champion::new("Ahri", "Ahri", "u")]);
//! let visible = state.champions().map(|all| filter(all, "ah")).unwrap_or_default();
//! assert_eq!(visible.len(), 1);
//! ```

pub mod champion;
pub mod error;
pub mod filter;
pub mod load_state;

pub use champion::Champion;
pub use error::{DraftError, Result, LOAD_FAILURE_MESSAGE};
pub use filter::{filter, match_span, matching_indices};
pub use load_state::LoadState;
