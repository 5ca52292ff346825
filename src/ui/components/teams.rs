//! Team panel renderer.
//!
//! Each side of the draft gets a framed panel titled with the team name. Bans
//! and picks are not tracked yet, so the body is a dimmed placeholder.

use crate::ui::helpers::{truncate, width, wrap_words, Canvas};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TeamPanel, TeamSide};

/// Renders `panel` as a box from `top` to `bottom` (inclusive), `panel_width` wide.
///
/// Nothing is drawn when the box would have no interior.
pub fn render_team_panel(
    canvas: &mut Canvas,
    panel: &TeamPanel,
    col: usize,
    top: usize,
    bottom: usize,
    panel_width: usize,
    theme: &Theme,
) {
    if bottom < top + 2 || panel_width < 4 {
        return;
    }

    let inner_width = panel_width - 2;
    let border = Theme::fg(&theme.colors.border);
    let title_color = match panel.side {
        TeamSide::Blue => &theme.colors.blue_team_fg,
        TeamSide::Red => &theme.colors.red_team_fg,
    };

    let title = truncate(&panel.name, inner_width.saturating_sub(2));
    let title_len = width(&title) + 2;

    canvas.move_to(top, col);
    canvas.put(&border);
    canvas.put("┌");
    canvas.put(Theme::bold());
    canvas.put(&Theme::fg(title_color));
    canvas.put(&format!(" {title} "));
    canvas.put(Theme::reset());
    canvas.put(&border);
    canvas.put(&"─".repeat(inner_width.saturating_sub(title_len)));
    canvas.put("┐");
    canvas.put(Theme::reset());

    let lines = wrap_words(&panel.placeholder, inner_width.saturating_sub(2));
    for row in top + 1..bottom {
        let text = lines.get(row - top - 1).map_or("", String::as_str);
        canvas.move_to(row, col);
        canvas.put(&border);
        canvas.put("│");
        canvas.put(Theme::dim());
        canvas.put(&Theme::fg(&theme.colors.text_dim));
        canvas.put(" ");
        canvas.put(text);
        canvas.pad(inner_width.saturating_sub(width(text) + 1));
        canvas.put(Theme::reset());
        canvas.put(&border);
        canvas.put("│");
        canvas.put(Theme::reset());
    }

    canvas.move_to(bottom, col);
    canvas.put(&border);
    canvas.put(&format!("└{}┘", "─".repeat(inner_width)));
    canvas.put(Theme::reset());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::screen_lines;

    fn panel() -> TeamPanel {
        TeamPanel {
            side: TeamSide::Blue,
            name: "Blue Team".into(),
            placeholder: "Bans and picks will go here".into(),
        }
    }

    #[test]
    fn panel_frames_title_and_placeholder() {
        let mut canvas = Canvas::new();
        render_team_panel(&mut canvas, &panel(), 1, 1, 5, 20, &Theme::default());

        let lines = screen_lines(canvas.as_str());
        assert_eq!(lines[0], "┌ Blue Team ───────┐");
        assert_eq!(lines[1], "│ Bans and picks   │");
        assert_eq!(lines[2], "│ will go here     │");
        assert_eq!(lines[3], "│                  │");
        assert_eq!(lines[4], "└──────────────────┘");
    }

    #[test]
    fn short_panes_skip_the_panel() {
        let mut canvas = Canvas::new();
        render_team_panel(&mut canvas, &panel(), 1, 4, 5, 20, &Theme::default());
        assert!(canvas.as_str().is_empty());
    }
}
