//! Composable UI component renderers.
//!
//! Each component draws one region of the draft screen into a [`Canvas`].
//!
//! # Components
//!
//! - [`header`]: Title bar with the champion count
//! - [`search`]: Search input box
//! - [`grid`]: Champion tiles
//! - [`empty`]: Loading, failure and no-match placeholders
//! - [`teams`]: Blue and red team panels
//! - [`footer`]: Selected champion detail and keybinding hints
//!
//! # Layout
//!
//! See [`ScreenLayout`](crate::ui::layout::ScreenLayout) for where each region
//! sits.

mod empty;
mod footer;
mod grid;
mod header;
mod search;
mod teams;

use crate::ui::helpers::{width, Canvas};
use crate::ui::layout::{GRID_TOP, SEARCH_TOP, TEAM_PANEL_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{GridBody, UIViewModel};

use empty::{render_empty_state, render_status};
use footer::render_footer;
use grid::{render_grid, scroll_hint};
use header::render_header;
use search::render_search_bar;
use teams::render_team_panel;

/// Rows below the grid top where placeholders are drawn.
const PLACEHOLDER_OFFSET: usize = 2;

/// Renders a horizontal border line, with an optional right-aligned label.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(canvas: &mut Canvas, row: usize, color: &str, cols: usize, label: Option<&str>) -> usize {
    canvas.move_to(row, 1);
    canvas.put(&Theme::fg(color));
    match label {
        Some(label) if width(label) + 4 <= cols => {
            let label_len = width(label) + 2;
            canvas.put(&"─".repeat(cols - label_len - 2));
            canvas.put(&format!(" {label} "));
            canvas.put("──");
        }
        _ => canvas.put(&"─".repeat(cols)),
    }
    canvas.put(Theme::reset());
    row + 1
}

/// Renders the full draft screen for `vm`.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Blue panel] [Search Bar - 3 lines] [Red panel]
/// [Blue panel] [Tiles or placeholder] [Red panel]
/// [Border, with scroll hint]
/// [Selected champion detail]
/// [Keybindings]
/// ```
pub fn render_draft_screen(canvas: &mut Canvas, vm: &UIViewModel, theme: &Theme) {
    let layout = &vm.layout;
    let cols = layout.cols;

    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)
    current_row = render_header(canvas, current_row, &vm.header, theme, cols);
    render_border(canvas, current_row, &theme.colors.border, cols, None);

    if let Some([blue, red]) = &vm.teams {
        let bottom = layout.panel_bottom_row();
        render_team_panel(canvas, blue, 1, SEARCH_TOP, bottom, TEAM_PANEL_WIDTH, theme);
        let red_col = cols.saturating_sub(TEAM_PANEL_WIDTH) + 1;
        render_team_panel(canvas, red, red_col, SEARCH_TOP, bottom, TEAM_PANEL_WIDTH, theme);
    }

    render_search_bar(
        canvas,
        SEARCH_TOP,
        layout.content_col,
        layout.content_width,
        &vm.search_bar,
        theme,
    );

    let placeholder_row = GRID_TOP + PLACEHOLDER_OFFSET.min(layout.grid_rows.saturating_sub(1));
    let mut hint = None;
    if layout.grid_rows > 0 {
        match &vm.body {
            GridBody::Loading(status) => render_status(
                canvas,
                placeholder_row,
                layout.content_col,
                layout.content_width,
                status,
                &theme.colors.loading_fg,
            ),
            GridBody::Failed(status) => render_status(
                canvas,
                placeholder_row,
                layout.content_col,
                layout.content_width,
                status,
                &theme.colors.error_fg,
            ),
            GridBody::Empty(empty) => render_empty_state(
                canvas,
                placeholder_row,
                layout.content_col,
                layout.content_width,
                empty,
                theme,
            ),
            GridBody::Tiles(grid) => {
                render_grid(canvas, GRID_TOP, layout.content_col, grid, theme);
                hint = scroll_hint(grid);
            }
        }
    }

    render_border(
        canvas,
        layout.bottom_border_row(),
        &theme.colors.border,
        cols,
        hint.as_deref(),
    );
    render_footer(
        canvas,
        layout.detail_row(),
        layout.keybindings_row(),
        &vm.footer,
        theme,
        cols,
    );
}
