//! Champion tile grid renderer.
//!
//! Tiles are laid out row-major, [`TILE_WIDTH`] cells each:
//!
//! ```text
//! [Aa] Aatrox       [Ah] Ahri         [Ak] Akali
//! ```
//!
//! The bracketed monogram stands in for the champion icon and links to the
//! icon URL, so terminals with OSC 8 support can open the image on demand.
//! Champions without an icon URL get a plain badge.

use crate::ui::helpers::{self, hyperlink, width, Canvas};
use crate::ui::layout::{TILE_NAME_WIDTH, TILE_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Tile, TileGrid};

/// Cells taken by the badge and the space after it.
const BADGE_WIDTH: usize = 5;

/// Renders the tiles of `grid` starting at `top` / `col`.
pub fn render_grid(canvas: &mut Canvas, top: usize, col: usize, grid: &TileGrid, theme: &Theme) {
    let columns = grid.columns.max(1);
    for (i, tile) in grid.tiles.iter().enumerate() {
        let row = top + i / columns;
        let tile_col = col + (i % columns) * TILE_WIDTH;
        render_tile(canvas, row, tile_col, tile, theme);
    }
}

fn render_tile(canvas: &mut Canvas, row: usize, col: usize, tile: &Tile, theme: &Theme) {
    canvas.move_to(row, col);

    if tile.is_selected {
        canvas.put(&Theme::fg(&theme.colors.selection_fg));
        canvas.put(&Theme::bg(&theme.colors.selection_bg));
        canvas.put(Theme::bold());
    } else {
        canvas.put(&Theme::fg(&theme.colors.badge_fg));
    }

    let badge = format!("[{}]", tile.badge);
    if tile.icon_url.is_empty() {
        canvas.put(&badge);
    } else {
        canvas.put(&hyperlink(&tile.icon_url, &badge));
    }
    canvas.pad(BADGE_WIDTH.saturating_sub(width(&badge)));

    if !tile.is_selected {
        canvas.put(&Theme::fg(&theme.colors.text_normal));
    }

    let ranges: Vec<(usize, usize)> = tile.highlight.into_iter().collect();
    helpers::render_highlighted_text(canvas, &tile.name, &ranges, theme, tile.is_selected);
    canvas.pad(TILE_NAME_WIDTH.saturating_sub(width(&tile.name)));

    canvas.put(Theme::reset());
}

/// Label for the scroll hint, e.g. `↑ 3 more · ↓ 12 more`.
///
/// Returns `None` when every tile is on screen.
#[must_use]
pub fn scroll_hint(grid: &TileGrid) -> Option<String> {
    match (grid.hidden_above, grid.hidden_below) {
        (0, 0) => None,
        (above, 0) => Some(format!("↑ {above} more")),
        (0, below) => Some(format!("↓ {below} more")),
        (above, below) => Some(format!("↑ {above} more · ↓ {below} more")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::screen_lines;

    fn tile(name: &str, is_selected: bool) -> Tile {
        Tile {
            key: name.to_string(),
            name: name.to_string(),
            badge: name.chars().take(2).collect(),
            icon_url: format!("https://cdn/{name}.png"),
            is_selected,
            highlight: None,
        }
    }

    #[test]
    fn tiles_flow_row_major() {
        let grid = TileGrid {
            tiles: vec![tile("Aatrox", true), tile("Ahri", false), tile("Akali", false)],
            columns: 2,
            hidden_above: 0,
            hidden_below: 0,
        };
        let mut canvas = Canvas::new();
        render_grid(&mut canvas, 1, 1, &grid, &Theme::default());

        let lines = screen_lines(canvas.as_str());
        assert_eq!(lines[0], format!("[Aa] Aatrox{}[Ah] Ahri", " ".repeat(7)));
        assert_eq!(lines[1], "[Ak] Akali");
        assert!(canvas.as_str().contains("\u{1b}]8;;https://cdn/Ahri.png\u{1b}\\[Ah]"));
    }

    #[test]
    fn tile_without_icon_has_no_link() {
        let mut zed = tile("Zed", false);
        zed.icon_url = String::new();
        let grid = TileGrid { tiles: vec![zed], columns: 1, hidden_above: 0, hidden_below: 0 };
        let mut canvas = Canvas::new();
        render_grid(&mut canvas, 1, 1, &grid, &Theme::default());

        assert_eq!(screen_lines(canvas.as_str()), ["[Ze] Zed"]);
        assert!(!canvas.as_str().contains("\u{1b}]8;;"));
    }

    #[test]
    fn hint_reports_hidden_tiles() {
        let mut grid = TileGrid { tiles: vec![], columns: 3, hidden_above: 0, hidden_below: 0 };
        assert_eq!(scroll_hint(&grid), None);
        grid.hidden_below = 12;
        assert_eq!(scroll_hint(&grid).as_deref(), Some("↓ 12 more"));
        grid.hidden_above = 3;
        assert_eq!(scroll_hint(&grid).as_deref(), Some("↑ 3 more · ↓ 12 more"));
    }
}
