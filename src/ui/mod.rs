//! User interface rendering layer with component-based architecture.
//!
//! This module transforms view models into ANSI-styled output through
//! composable rendering components, with theme support and a layout that adapts
//! to the pane size.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Canvas → stdout
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`layout`]: Screen geometry for a given pane size
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (canvas, truncation, highlighting)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{compose, render};
pub use theme::Theme;
pub use viewmodel::{
    EmptyState, FooterInfo, GridBody, HeaderInfo, SearchBarInfo, StatusMessage, TeamPanel, TeamSide,
    Tile, TileGrid, UIViewModel,
};
