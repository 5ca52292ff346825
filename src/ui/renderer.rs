//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers, which
//!    draw into a [`Canvas`]
//!
//! # Example
//!
//! ```rust
//! use draftboard::app::AppState;
//! use draftboard::ui::helpers::screen_lines;
//! use draftboard::ui::renderer::compose;
//!
//! let state = AppState::default();
//! let frame = compose(&state, 24, 100);
//! assert!(screen_lines(&frame)[1].contains("Draft Screen"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Canvas;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", compose(state, rows, cols));
}

/// Builds the ANSI frame for a pane of `rows` x `cols` without printing it.
#[must_use]
pub fn compose(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("compose", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme)
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme) -> String {
    let mut canvas = Canvas::new();
    components::render_draft_screen(&mut canvas, vm, theme);
    canvas.into_string()
}
