//! Champion data client.
//!
//! Describes the one web request a plugin instance makes for the champion list
//! and classifies whatever comes back into a terminal
//! [`LoadState`](crate::domain::LoadState).
//!
//! # Architecture
//!
//! ```text
//! AppState ──Action::FetchChampions(ChampionRequest)──► Zellij shim ──► web_request
//!     ▲                                                                     │
//!     └──Event::ChampionsReceived──── resolve_response ◄── WebRequestResult ┘
//! ```
//!
//! # Modules
//!
//! - [`request`]: Request description and response context encoding
//! - [`response`]: Body parsing and outcome classification

pub mod request;
pub mod response;

pub use request::{latency_ms_from_context, request_id_from_context, ChampionRequest};
pub use response::{parse_champions, resolve_failure, resolve_response};
