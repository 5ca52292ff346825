//! Shared rendering utilities and helpers.
//!
//! Components draw into a [`Canvas`], an ANSI output buffer addressed by
//! absolute cursor positions. The renderer prints the finished buffer in one
//! go, and tests read it back through [`screen_lines`].
//!
//! # Features
//!
//! - **Match Highlighting**: Renders text with highlighted character ranges
//! - **Hyperlinks**: Wraps text in OSC 8 links for terminals that support them
//! - **UTF-8 Safe**: Truncation and highlighting operate on characters
//!
//! # Example
//!
//! ```rust
//! use draftboard::ui::helpers::{screen_lines, Canvas};
//!
//! let mut canvas = Canvas::new();
//! canvas.move_to(2, 3);
//! canvas.put("Ahri");
//! assert_eq!(screen_lines(canvas.as_str()), ["", "  Ahri"]);
//! ```

use crate::ui::theme::Theme;

/// ANSI output buffer for one frame.
#[derive(Debug, Default, Clone)]
pub struct Canvas {
    buf: String,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the cursor at a 1-indexed row and column.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    /// Appends text or escape sequences at the cursor.
    pub fn put(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Appends `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.buf.extend(std::iter::repeat(' ').take(count));
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Number of terminal cells `text` occupies, counting one per character.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, ending in `…` when shortened.
///
/// # Examples
///
/// ```
/// use draftboard::ui::helpers::truncate;
///
/// assert_eq!(truncate("Miss Fortune", 6), "Miss …");
/// assert_eq!(truncate("Ahri", 6), "Ahri");
/// assert_eq!(truncate("Ahri", 0), "");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Wraps `text` in an OSC 8 hyperlink to `url`.
///
/// Terminals without OSC 8 support show `text` unchanged.
#[must_use]
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\u{1b}]8;;{url}\u{1b}\\{text}\u{1b}]8;;\u{1b}\\")
}

/// Greedily wraps `text` on spaces into lines of at most `max` characters.
///
/// Words longer than `max` are truncated.
#[must_use]
pub fn wrap_words(text: &str, max: usize) -> Vec<String> {
    let mut lines: Vec<String> = vec![];
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, max);
        if current.is_empty() {
            current = word;
        } else if width(&current) + 1 + width(&word) <= max {
            current.push(' ');
            current.push_str(&word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Renders text with highlighted character ranges for query matches.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. Highlighting is skipped on selected items so the selection
/// background stays uniform; unselected text returns to `text_normal` after
/// each highlighted run.
pub fn render_highlighted_text(
    canvas: &mut Canvas,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        canvas.put(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            canvas.put(&normal_section);
        }

        canvas.put(&Theme::fg(&theme.colors.match_highlight_fg));
        canvas.put(&Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        canvas.put(&highlighted_section);
        canvas.put(Theme::reset());
        canvas.put(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        canvas.put(&remaining);
    }
}

/// Replays ANSI output onto a blank screen and returns its text rows.
///
/// Cursor positioning (`ESC [ row ; col H`) is honoured, every other escape
/// sequence is dropped, and trailing spaces are trimmed. Row 1 is index 0.
#[must_use]
pub fn screen_lines(ansi: &str) -> Vec<String> {
    let mut screen: Vec<Vec<char>> = vec![];
    let (mut row, mut col) = (0usize, 0usize);
    let mut chars = ansi.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            if screen.len() <= row {
                screen.resize(row + 1, vec![]);
            }
            let line = &mut screen[row];
            if line.len() <= col {
                line.resize(col + 1, ' ');
            }
            line[col] = c;
            col += 1;
            continue;
        }

        match chars.next() {
            Some('[') => {
                let mut params = String::new();
                for p in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&p) {
                        if p == 'H' {
                            let mut parts = params.split(';').map(|n| n.parse::<usize>().unwrap_or(1));
                            row = parts.next().unwrap_or(1).saturating_sub(1);
                            col = parts.next().unwrap_or(1).saturating_sub(1);
                        }
                        break;
                    }
                    params.push(p);
                }
            }
            Some(']') => {
                while let Some(p) = chars.next() {
                    if p == '\u{7}' {
                        break;
                    }
                    if p == '\u{1b}' && chars.peek() == Some(&'\\') {
                        chars.next();
                        break;
                    }
                }
            }
            _ => {}
        }
    }

    screen
        .into_iter()
        .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate("Kai'Sa", 6), "Kai'Sa");
        assert_eq!(truncate("Nunu & Willump", 8), "Nunu & …");
        assert_eq!(truncate("Ça va", 3), "Ça…");
    }

    #[test]
    fn wrap_breaks_on_spaces() {
        assert_eq!(
            wrap_words("Bans and picks will go here", 18),
            ["Bans and picks", "will go here"]
        );
        assert_eq!(wrap_words("", 10), Vec::<String>::new());
        assert_eq!(wrap_words("abcdefghijk", 4), ["abc…"]);
    }

    #[test]
    fn screen_replay_ignores_styles_and_links() {
        let mut canvas = Canvas::new();
        canvas.move_to(1, 1);
        canvas.put(&Theme::fg("#ffffff"));
        canvas.put(&hyperlink("https://cdn/Ahri.png", "[Ah]"));
        canvas.put(Theme::reset());
        canvas.move_to(3, 2);
        canvas.put("x");
        canvas.move_to(1, 6);
        canvas.put("Ahri");
        assert_eq!(screen_lines(canvas.as_str()), ["[Ah] Ahri", "", " x"]);
    }

    #[test]
    fn highlight_keeps_text_intact() {
        let theme = Theme::default();
        let mut canvas = Canvas::new();
        render_highlighted_text(&mut canvas, "Aatrox", &[(1, 3)], &theme, false);
        assert_eq!(screen_lines(canvas.as_str()), ["Aatrox"]);
        assert!(canvas.as_str().contains(&Theme::bg(&theme.colors.match_highlight_bg)));

        let mut selected = Canvas::new();
        render_highlighted_text(&mut selected, "Aatrox", &[(1, 3)], &theme, true);
        assert_eq!(selected.as_str(), "Aatrox");
    }
}
