//! Placeholder renderers for the grid region.
//!
//! The grid area shows exactly one of: the loading indicator, the load
//! failure message, the no-match placeholder, or the tiles.

use crate::ui::helpers::{truncate, width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, StatusMessage};

/// Renders one centered line in `color` within `[col, col + region_width)`.
fn render_centered(canvas: &mut Canvas, row: usize, col: usize, region_width: usize, text: &str, color: &str) {
    let text = truncate(text, region_width);
    let text_len = width(&text);
    let padding = region_width.saturating_sub(text_len) / 2;

    canvas.move_to(row, col);
    canvas.put(&Theme::fg(color));
    canvas.pad(padding);
    canvas.put(&text);
    canvas.pad(region_width.saturating_sub(padding + text_len));
    canvas.put(Theme::reset());
}

/// Renders the loading indicator or the failure message.
pub fn render_status(
    canvas: &mut Canvas,
    row: usize,
    col: usize,
    region_width: usize,
    status: &StatusMessage,
    color: &str,
) {
    render_centered(canvas, row, col, region_width, &status.message, color);
}

/// Renders the no-match placeholder as a message and a dimmed subtitle.
pub fn render_empty_state(
    canvas: &mut Canvas,
    row: usize,
    col: usize,
    region_width: usize,
    empty: &EmptyState,
    theme: &Theme,
) {
    render_centered(canvas, row, col, region_width, &empty.message, &theme.colors.empty_state_fg);
    canvas.put(Theme::dim());
    render_centered(canvas, row + 1, col, region_width, &empty.subtitle, &theme.colors.text_dim);
}
