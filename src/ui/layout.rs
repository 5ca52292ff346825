//! Screen geometry for the draft screen.
//!
//! ```text
//! row 1          (blank)
//! row 2          Draft Screen title
//! row 3          ──────── border ────────
//! rows 4..=6     ┌ Blue ┐ ┌── search ──┐ ┌ Red ┐
//! rows 7..       │      │  tile  tile    │     │
//! rows-2         ──────── border ────────
//! rows-1         selected champion detail
//! rows           keybindings
//! ```
//!
//! Team panels take [`TEAM_PANEL_WIDTH`] columns on each side and disappear
//! below [`MIN_COLS_FOR_TEAMS`] so narrow panes keep the whole width for tiles.

/// Width of each team panel, including its border.
pub const TEAM_PANEL_WIDTH: usize = 20;

/// Narrowest pane that still shows the team panels.
pub const MIN_COLS_FOR_TEAMS: usize = 80;

/// Width of one champion tile: `[Ah] ` badge, name, one space gap.
pub const TILE_WIDTH: usize = 18;

/// Characters of a tile name shown before truncation.
pub const TILE_NAME_WIDTH: usize = TILE_WIDTH - 6;

/// First row of the search box.
pub const SEARCH_TOP: usize = 4;

/// First row of the tile grid.
pub const GRID_TOP: usize = SEARCH_TOP + 3;

/// Rows taken below the grid (border, detail, keybindings).
const BOTTOM_CHROME: usize = 3;

/// Computed placement of every screen region for one pane size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Pane height in rows.
    pub rows: usize,
    /// Pane width in columns.
    pub cols: usize,
    /// Whether the team panels are drawn.
    pub show_teams: bool,
    /// 1-indexed column where the search box and grid start.
    pub content_col: usize,
    /// Width of the search box and grid region.
    pub content_width: usize,
    /// Tiles per grid row (at least 1).
    pub columns: usize,
    /// Grid rows that fit between the search box and the bottom chrome.
    pub grid_rows: usize,
}

impl ScreenLayout {
    /// Computes the layout for a pane of `rows` x `cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use draftboard::ui::layout::ScreenLayout;
    ///
    /// let layout = ScreenLayout::compute(24, 120);
    /// assert!(layout.show_teams);
    /// assert_eq!(layout.content_width, 80);
    /// assert_eq!(layout.columns, 4);
    /// assert_eq!(layout.grid_rows, 15);
    /// ```
    #[must_use]
    pub fn compute(rows: usize, cols: usize) -> Self {
        let show_teams = cols >= MIN_COLS_FOR_TEAMS;
        let side = if show_teams { TEAM_PANEL_WIDTH } else { 0 };
        let content_width = cols.saturating_sub(side * 2);

        Self {
            rows,
            cols,
            show_teams,
            content_col: side + 1,
            content_width,
            columns: (content_width / TILE_WIDTH).max(1),
            grid_rows: rows.saturating_sub(GRID_TOP - 1 + BOTTOM_CHROME),
        }
    }

    /// Row of the border above the footer.
    #[must_use]
    pub const fn bottom_border_row(&self) -> usize {
        self.rows.saturating_sub(2)
    }

    /// Row of the selected champion detail line.
    #[must_use]
    pub const fn detail_row(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Row of the keybinding hints.
    #[must_use]
    pub const fn keybindings_row(&self) -> usize {
        self.rows
    }

    /// Last row the team panels may occupy.
    #[must_use]
    pub const fn panel_bottom_row(&self) -> usize {
        self.rows.saturating_sub(BOTTOM_CHROME)
    }

    /// Number of tiles that fit on screen at once.
    #[must_use]
    pub const fn visible_tiles(&self) -> usize {
        self.columns * self.grid_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_panes_drop_team_panels() {
        let layout = ScreenLayout::compute(20, 60);
        assert!(!layout.show_teams);
        assert_eq!(layout.content_col, 1);
        assert_eq!(layout.content_width, 60);
        assert_eq!(layout.columns, 3);
    }

    #[test]
    fn tiny_panes_keep_one_column() {
        let layout = ScreenLayout::compute(5, 10);
        assert_eq!(layout.columns, 1);
        assert_eq!(layout.grid_rows, 0);
        assert_eq!(layout.visible_tiles(), 0);
        assert_eq!(ScreenLayout::compute(24, 120).visible_tiles(), 60);
    }

    #[test]
    fn footer_rows_sit_at_the_bottom() {
        let layout = ScreenLayout::compute(30, 100);
        assert_eq!(layout.bottom_border_row(), 28);
        assert_eq!(layout.detail_row(), 29);
        assert_eq!(layout.keybindings_row(), 30);
        assert_eq!(layout.panel_bottom_row(), 27);
        assert_eq!(layout.grid_rows, 21);
    }
}
