//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They contain no business
//! logic, only display-ready data: truncated names, highlight ranges, selection
//! flags and the exact placeholder text for each load state.

use crate::ui::layout::ScreenLayout;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Screen geometry the model was computed for.
    pub layout: ScreenLayout,

    /// Title line.
    pub header: HeaderInfo,

    /// Search input, present in every load state.
    pub search_bar: SearchBarInfo,

    /// What the grid region shows.
    pub body: GridBody,

    /// Blue and red team panels, `None` when the pane is too narrow.
    pub teams: Option<[TeamPanel; 2]>,

    /// Detail line and keybinding hints.
    pub footer: FooterInfo,
}

/// Content of the grid region.
///
/// Exactly one of these is shown, so the loading indicator, the error message
/// and the tiles can never appear together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridBody {
    /// The champion request is still in flight.
    Loading(StatusMessage),
    /// Loading failed; only the message is shown.
    Failed(StatusMessage),
    /// Loaded, but nothing matches the query.
    Empty(EmptyState),
    /// Loaded champions matching the query.
    Tiles(TileGrid),
}

/// A single-line status placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// The window of tiles currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    /// Tiles in row-major order.
    pub tiles: Vec<Tile>,

    /// Tiles per row.
    pub columns: usize,

    /// Tiles scrolled off above the window.
    pub hidden_above: usize,

    /// Tiles scrolled off below the window.
    pub hidden_below: usize,
}

/// Display information for one champion tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Champion id, the tile key.
    pub key: String,

    /// Display name, truncated to the tile width.
    pub name: String,

    /// Two-letter monogram standing in for the icon.
    pub badge: String,

    /// Icon location, attached to the badge as a hyperlink.
    pub icon_url: String,

    /// Whether this tile holds the cursor.
    pub is_selected: bool,

    /// Character range of `name` matching the query, `(start, end)` exclusive.
    pub highlight: Option<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current query text.
    pub query: String,

    /// Hint shown while the query is empty.
    pub placeholder: String,
}

/// Which side of the draft a team panel belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSide {
    Blue,
    Red,
}

/// A team panel placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPanel {
    pub side: TeamSide,
    pub name: String,
    /// Text shown inside the empty panel.
    pub placeholder: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Selected champion summary, when a tile is selected.
    pub detail: Option<String>,

    /// Keybinding help text.
    pub keybindings: String,
}
