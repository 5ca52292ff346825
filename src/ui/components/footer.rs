//! Footer component renderer.
//!
//! Renders the selected champion detail line and the centered keybinding hints.

use crate::ui::helpers::{truncate, width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the detail line at `detail_row` and the hints at `keys_row`.
///
/// The detail line is left-aligned and cut to the pane width. The hints are
/// dimmed, centered, and truncated on narrow panes so they never wrap.
pub fn render_footer(
    canvas: &mut Canvas,
    detail_row: usize,
    keys_row: usize,
    footer: &FooterInfo,
    theme: &Theme,
    cols: usize,
) {
    canvas.move_to(detail_row, 1);
    canvas.put(&Theme::fg(&theme.colors.text_normal));
    let detail = footer.detail.as_deref().map(|d| truncate(d, cols.saturating_sub(1)));
    let detail_len = detail.as_deref().map_or(0, |d| width(d) + 1);
    if let Some(detail) = &detail {
        canvas.put(" ");
        canvas.put(detail);
    }
    canvas.pad(cols.saturating_sub(detail_len));
    canvas.put(Theme::reset());

    let help_text = truncate(&footer.keybindings, cols);
    let text_len = width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    canvas.move_to(keys_row, 1);
    canvas.put(&Theme::fg(&theme.colors.text_dim));
    canvas.pad(padding);
    canvas.put(&help_text);
    canvas.pad(cols.saturating_sub(padding + text_len));
    canvas.put(Theme::reset());
}
