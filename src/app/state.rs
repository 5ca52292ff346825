//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of the champion
//! [`LoadState`], the search query and the grid cursor for one plugin instance.
//!
//! # State Components
//!
//! - **Load state**: `Loading` until the one champion request resolves
//! - **Query**: search text, edited on every keystroke
//! - **Visible**: positions of the champions matching the query, re-derived
//!   whenever the load resolves or the query changes
//! - **Selection**: cursor within the visible tiles
//! - **Request bookkeeping**: whether the fetch was issued, which response is
//!   awaited, and whether the instance has been torn down
//!
//! # Example
//!
//! ```rust
//! use draftboard::app::AppState;
//! use draftboard::domain::{Champion, LoadState};
//!
//! let mut state = AppState::default();
//! state.resolve(LoadState::Ready(vec![Champion::new("Ahri", "Ahri", "u")]));
//! state.query.push_str("ah");
//! state.apply_search_filter();
//! assert_eq!(state.visible_champions().len(), 1);
//! ```

use super::navigation::{self, Direction};
use crate::domain::{match_span, matching_indices, Champion, LoadState};
use crate::ui::layout::{ScreenLayout, TILE_NAME_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, GridBody, HeaderInfo, SearchBarInfo, StatusMessage, TeamPanel, TeamSide,
    Tile, TileGrid, UIViewModel,
};

/// Default champions endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/champions";

const TITLE: &str = "Draft Screen";
const LOADING_MESSAGE: &str = "Loading...";
const NO_MATCHES_MESSAGE: &str = "No champions found.";
const SEARCH_PLACEHOLDER: &str = "Search champions...";
const TEAM_PLACEHOLDER: &str = "Bans and picks will go here";
const KEYBINDINGS: &str = "Type to search  Arrows or Ctrl+n/p: move  Backspace: delete  Esc: clear/close";

/// Central application state container.
///
/// Mutated only by [`handle_event`](crate::app::handle_event) in response to
/// plugin events. View models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Lifecycle of the champion fetch.
    pub load_state: LoadState,

    /// Current search query.
    pub query: String,

    /// Positions in the loaded champion list matching `query`, in list order.
    ///
    /// Empty unless `load_state` is `Ready`.
    pub visible: Vec<usize>,

    /// Zero-based index of the selected tile within `visible`.
    pub selected_index: usize,

    /// Tiles per grid row at the last render, used for vertical moves.
    pub grid_columns: usize,

    /// Champions endpoint URL.
    pub endpoint: String,

    /// Left panel title.
    pub blue_team: String,

    /// Right panel title.
    pub red_team: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Set once the champion request has been emitted (or found impossible).
    pub fetch_issued: bool,

    /// Id of the request whose response is awaited.
    pub pending_request: Option<u64>,

    /// Cleared on teardown; afterwards every event is ignored.
    pub mounted: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, "Blue Team", "Red Team", Theme::default())
    }
}

impl AppState {
    /// Creates the state of a freshly mounted instance: `Loading`, empty query.
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        blue_team: impl Into<String>,
        red_team: impl Into<String>,
        theme: Theme,
    ) -> Self {
        Self {
            load_state: LoadState::Loading,
            query: String::new(),
            visible: vec![],
            selected_index: 0,
            grid_columns: 1,
            endpoint: endpoint.into(),
            blue_team: blue_team.into(),
            red_team: red_team.into(),
            theme,
            fetch_issued: false,
            pending_request: None,
            mounted: true,
        }
    }

    /// Moves from `Loading` to a terminal state.
    ///
    /// Returns `false` and leaves the state untouched when the load has
    /// already resolved, so the transition happens at most once.
    pub fn resolve(&mut self, outcome: LoadState) -> bool {
        if !self.load_state.is_loading() {
            tracing::debug!(
                current = self.load_state.label(),
                ignored = outcome.label(),
                "load already resolved"
            );
            return false;
        }

        tracing::debug!(outcome = outcome.label(), "load state resolved");
        self.load_state = outcome;
        self.pending_request = None;
        self.apply_search_filter();
        true
    }

    /// Re-derives `visible` from the loaded champions and the query.
    ///
    /// Clamps `selected_index` to the new bounds.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            load_state = self.load_state.label(),
            query_len = self.query.len()
        )
        .entered();

        self.visible = self
            .load_state
            .champions()
            .map(|champions| matching_indices(champions, &self.query))
            .unwrap_or_default();

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }

        tracing::debug!(visible_count = self.visible.len(), "search filter applied");
    }

    /// Champions currently matching the query, in list order.
    #[must_use]
    pub fn visible_champions(&self) -> Vec<&Champion> {
        let Some(champions) = self.load_state.champions() else {
            return vec![];
        };
        self.visible.iter().filter_map(|&idx| champions.get(idx)).collect()
    }

    /// Returns the champion under the cursor, if any.
    #[must_use]
    pub fn selected_champion(&self) -> Option<&Champion> {
        let idx = *self.visible.get(self.selected_index)?;
        self.load_state.champions()?.get(idx)
    }

    /// Moves the cursor one step. No-op when nothing is visible.
    pub fn move_selection(&mut self, direction: Direction) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index =
            navigation::step(self.selected_index, self.visible.len(), self.grid_columns, direction);
    }

    /// Records the pane size so cursor moves follow the rendered grid.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.grid_columns = ScreenLayout::compute(rows, cols).columns;
    }

    /// Computes a renderable UI view model for a pane of `rows` x `cols`.
    ///
    /// The grid body follows the load state: a loading indicator, the error
    /// message alone, the empty placeholder, or the window of tiles around the
    /// selection.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let layout = ScreenLayout::compute(rows, cols);

        let body = match &self.load_state {
            LoadState::Loading => GridBody::Loading(StatusMessage {
                message: LOADING_MESSAGE.to_string(),
            }),
            LoadState::Failed(message) => GridBody::Failed(StatusMessage {
                message: message.clone(),
            }),
            LoadState::Ready(_) if self.visible.is_empty() => GridBody::Empty(EmptyState {
                message: NO_MATCHES_MESSAGE.to_string(),
                subtitle: self.empty_subtitle(),
            }),
            LoadState::Ready(_) => GridBody::Tiles(self.compute_tile_grid(&layout)),
        };

        let teams = layout.show_teams.then(|| {
            [
                TeamPanel {
                    side: TeamSide::Blue,
                    name: self.blue_team.clone(),
                    placeholder: TEAM_PLACEHOLDER.to_string(),
                },
                TeamPanel {
                    side: TeamSide::Red,
                    name: self.red_team.clone(),
                    placeholder: TEAM_PLACEHOLDER.to_string(),
                },
            ]
        });

        UIViewModel {
            layout,
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.query.clone(),
                placeholder: SEARCH_PLACEHOLDER.to_string(),
            },
            body,
            teams,
            footer: self.compute_footer(),
        }
    }

    /// Windows the visible tiles so the selected row stays on screen.
    ///
    /// The selected row is centred when possible and the window is pulled up
    /// near the end of the list to keep it full.
    fn compute_tile_grid(&self, layout: &ScreenLayout) -> TileGrid {
        let champions = self.visible_champions();
        let columns = layout.columns;
        let total_rows = champions.len().div_ceil(columns);
        let window_rows = layout.grid_rows.min(total_rows);

        let selected_row = self.selected_index / columns;
        let first_row = selected_row
            .saturating_sub(window_rows / 2)
            .min(total_rows.saturating_sub(window_rows));

        let start = first_row * columns;
        let end = (start + layout.visible_tiles()).min(champions.len());

        let tiles = champions[start..end]
            .iter()
            .enumerate()
            .map(|(offset, champion)| self.compute_tile(champion, start + offset == self.selected_index))
            .collect();

        TileGrid {
            tiles,
            columns,
            hidden_above: start,
            hidden_below: champions.len() - end,
        }
    }

    fn compute_tile(&self, champion: &Champion, is_selected: bool) -> Tile {
        let name_len = champion.display_name.chars().count();
        let (name, shown_chars) = if name_len > TILE_NAME_WIDTH {
            let kept: String = champion.display_name.chars().take(TILE_NAME_WIDTH - 1).collect();
            (format!("{kept}…"), TILE_NAME_WIDTH - 1)
        } else {
            (champion.display_name.clone(), name_len)
        };

        let highlight = match_span(&champion.display_name, &self.query)
            .filter(|&(start, _)| start < shown_chars)
            .map(|(start, end)| (start, end.min(shown_chars)));

        Tile {
            key: champion.id.clone(),
            name,
            badge: champion.monogram(),
            icon_url: champion.icon_url.clone(),
            is_selected,
            highlight,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.load_state.champions() {
            Some(champions) => format!(
                " {TITLE} - {}/{} champions ",
                self.visible.len(),
                champions.len()
            ),
            None => format!(" {TITLE} "),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let detail = self.selected_champion().map(|champion| {
            format!(
                "{}  id: {}  icon: {}",
                champion.display_name, champion.id, champion.icon_url
            )
        });

        FooterInfo {
            detail,
            keybindings: KEYBINDINGS.to_string(),
        }
    }

    fn empty_subtitle(&self) -> String {
        if self.query.is_empty() {
            "The backend returned an empty champion list".to_string()
        } else {
            format!("Nothing matches \"{}\"", self.query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LOAD_FAILURE_MESSAGE;

    fn ready_state(names: &[&str]) -> AppState {
        let mut state = AppState::default();
        let champions = names
            .iter()
            .map(|name| Champion::new(*name, *name, format!("https://cdn/{name}.png")))
            .collect();
        assert!(state.resolve(LoadState::Ready(champions)));
        state
    }

    fn tile_names(vm: &UIViewModel) -> Vec<String> {
        match &vm.body {
            GridBody::Tiles(grid) => grid.tiles.iter().map(|t| t.name.clone()).collect(),
            other => panic!("expected tiles, got {other:?}"),
        }
    }

    #[test]
    fn new_state_is_loading_with_empty_query() {
        let state = AppState::default();
        assert!(state.load_state.is_loading());
        assert!(state.query.is_empty());
        assert!(state.mounted);
        assert!(!state.fetch_issued);

        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(vm.body, GridBody::Loading(StatusMessage { message: "Loading...".into() }));
        assert_eq!(vm.search_bar.placeholder, "Search champions...");
        assert_eq!(vm.header.title, " Draft Screen ");
        assert!(vm.footer.detail.is_none());
    }

    #[test]
    fn resolution_happens_once() {
        let mut state = ready_state(&["Ahri"]);
        assert!(!state.resolve(LoadState::Failed(LOAD_FAILURE_MESSAGE.into())));
        assert!(matches!(state.load_state, LoadState::Ready(_)));
    }

    #[test]
    fn typing_before_load_is_kept() {
        let mut state = AppState::default();
        state.query.push_str("AH");
        state.apply_search_filter();
        assert!(state.visible.is_empty());

        state.resolve(LoadState::Ready(vec![
            Champion::new("Aatrox", "Aatrox", "u1"),
            Champion::new("Ahri", "Ahri", "u2"),
        ]));
        assert_eq!(state.visible, [1]);
    }

    #[test]
    fn failed_state_shows_only_the_message() {
        let mut state = AppState::default();
        state.resolve(LoadState::Failed(LOAD_FAILURE_MESSAGE.into()));
        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(
            vm.body,
            GridBody::Failed(StatusMessage { message: "Failed to load champions".into() })
        );
        assert!(state.visible.is_empty());
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let state = ready_state(&[]);
        let vm = state.compute_viewmodel(24, 100);
        assert!(matches!(&vm.body, GridBody::Empty(empty) if empty.message == "No champions found."));
        assert_eq!(vm.header.title, " Draft Screen - 0/0 champions ");
    }

    #[test]
    fn query_narrows_tiles() {
        let mut state = ready_state(&["Aatrox", "Ahri"]);
        assert_eq!(tile_names(&state.compute_viewmodel(24, 100)), ["Aatrox", "Ahri"]);

        state.query = "ahri".into();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 100);
        assert_eq!(tile_names(&vm), ["Ahri"]);
        assert_eq!(vm.header.title, " Draft Screen - 1/2 champions ");

        state.query = "zed".into();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 100);
        assert!(matches!(&vm.body, GridBody::Empty(empty) if empty.subtitle == "Nothing matches \"zed\""));
    }

    #[test]
    fn selection_clamps_after_filtering() {
        let mut state = ready_state(&["Aatrox", "Ahri", "Akali", "Annie"]);
        state.selected_index = 3;
        state.query = "a".into();
        state.apply_search_filter();
        assert_eq!(state.selected_index, 3);

        state.query = "ah".into();
        state.apply_search_filter();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_champion().map(|c| c.id.as_str()), Some("Ahri"));
    }

    #[test]
    fn tiles_carry_key_badge_icon_and_highlight() {
        let mut state = ready_state(&["Aatrox", "Ahri"]);
        state.query = "hr".into();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 100);
        let GridBody::Tiles(grid) = vm.body else { panic!("expected tiles") };
        let tile = &grid.tiles[0];
        assert_eq!(tile.key, "Ahri");
        assert_eq!(tile.badge, "Ah");
        assert_eq!(tile.icon_url, "https://cdn/Ahri.png");
        assert!(tile.is_selected);
        assert_eq!(tile.highlight, Some((1, 3)));
        assert_eq!(
            vm.footer.detail.as_deref(),
            Some("Ahri  id: Ahri  icon: https://cdn/Ahri.png")
        );
    }

    #[test]
    fn long_names_are_truncated() {
        let mut state = ready_state(&["Master Yi", "Twisted Fate Extended"]);
        state.query = "extended".into();
        state.apply_search_filter();
        let vm = state.compute_viewmodel(24, 100);
        let GridBody::Tiles(grid) = vm.body else { panic!("expected tiles") };
        assert_eq!(grid.tiles[0].name, "Twisted Fat…");
        assert_eq!(grid.tiles[0].highlight, None);
    }

    #[test]
    fn window_follows_selection() {
        let names: Vec<String> = (0..40).map(|i| format!("Champ{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut state = ready_state(&refs);

        // 60 cols without panels: 3 columns; 12 rows: 3 grid rows.
        state.resize(12, 60);
        assert_eq!(state.grid_columns, 3);

        let vm = state.compute_viewmodel(12, 60);
        let GridBody::Tiles(grid) = vm.body else { panic!("expected tiles") };
        assert_eq!(grid.tiles.len(), 9);
        assert_eq!(grid.hidden_above, 0);
        assert_eq!(grid.hidden_below, 31);

        state.selected_index = 39;
        let vm = state.compute_viewmodel(12, 60);
        let GridBody::Tiles(grid) = vm.body else { panic!("expected tiles") };
        assert_eq!(grid.hidden_above, 33);
        assert_eq!(grid.tiles.len(), 7);
        assert!(grid.tiles.last().is_some_and(|t| t.is_selected));
    }

    #[test]
    fn moves_use_rendered_columns() {
        let mut state = ready_state(&["A1", "A2", "A3", "A4", "A5"]);
        state.resize(24, 60);
        state.move_selection(Direction::Down);
        assert_eq!(state.selected_index, 3);
        state.move_selection(Direction::Right);
        assert_eq!(state.selected_index, 4);
        state.move_selection(Direction::Right);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn narrow_panes_hide_teams() {
        let state = AppState::default();
        assert!(state.compute_viewmodel(24, 60).teams.is_none());
        let teams = state.compute_viewmodel(24, 100).teams.expect("teams shown");
        assert_eq!(teams[0].name, "Blue Team");
        assert_eq!(teams[1].name, "Red Team");
        assert_eq!(teams[1].side, TeamSide::Red);
    }
}
