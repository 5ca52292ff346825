//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame. An empty
//! query shows the dimmed placeholder; a query too long for the box keeps its
//! tail visible so the last typed characters are always on screen.

use crate::ui::helpers::{width, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the search box at `row`, spanning `box_width` columns from `col`.
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// ┌──────────────────────┐
/// │ > Search champions...│
/// └──────────────────────┘
/// ```
pub fn render_search_bar(
    canvas: &mut Canvas,
    row: usize,
    col: usize,
    box_width: usize,
    search: &SearchBarInfo,
    theme: &Theme,
) -> usize {
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    canvas.move_to(row, col);
    canvas.put(&border);
    canvas.put(&format!("┌{}┐", "─".repeat(inner_width)));
    canvas.put(Theme::reset());

    let prompt = " > ";
    let room = inner_width.saturating_sub(width(prompt));
    let (text, color) = if search.query.is_empty() {
        let shown: String = search.placeholder.chars().take(room).collect();
        (shown, Theme::fg(&theme.colors.text_dim))
    } else {
        let skip = width(&search.query).saturating_sub(room);
        let shown: String = search.query.chars().skip(skip).collect();
        (shown, Theme::fg(&theme.colors.text_normal))
    };
    let used = (width(prompt) + width(&text)).min(inner_width);

    canvas.move_to(row + 1, col);
    canvas.put(&border);
    canvas.put("│");
    canvas.put(&Theme::fg(&theme.colors.text_normal));
    canvas.put(&prompt.chars().take(inner_width).collect::<String>());
    canvas.put(&color);
    canvas.put(&text);
    canvas.pad(inner_width.saturating_sub(used));
    canvas.put(&border);
    canvas.put("│");
    canvas.put(Theme::reset());

    canvas.move_to(row + 2, col);
    canvas.put(&border);
    canvas.put(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.put(Theme::reset());

    row + 3
}
