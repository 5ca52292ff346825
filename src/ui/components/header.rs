//! Header component renderer.
//!
//! This module renders the title bar with centered text, theme-aware colors,
//! and optional background styling.

use crate::ui::helpers::{truncate, width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// The title is bold, centered, and padded to the full pane width so an
/// optional `header_bg` fills the whole line.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(canvas: &mut Canvas, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = width(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    canvas.move_to(row, 1);
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        canvas.put(&Theme::bg(bg));
    }

    canvas.pad(padding);
    canvas.put(&title);
    canvas.pad(cols.saturating_sub(padding + title_len));

    canvas.put(Theme::reset());
    row + 1
}
