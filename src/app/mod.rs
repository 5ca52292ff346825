//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain and
//! client layers. It implements the event-driven controller behind the draft
//! screen.
//!
//! # Architecture
//!
//! ```text
//! Key / Host Events → Event Handler → State Mutations → Actions → Side Effects
//!                          ↑                                          ↓
//!                          └──────────── Web Request Results ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`navigation`]: Grid cursor movement
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use draftboard::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (_render, _actions) = handle_event(&mut state, &Event::Mount)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod actions;
pub mod handler;
pub mod navigation;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use navigation::Direction;
pub use state::{AppState, DEFAULT_ENDPOINT};
