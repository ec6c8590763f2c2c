//! Top-level rendering coordinator.
//!
//! The renderer computes the view model from application state and hands it to
//! the component layer. It does not clear the screen; Zellij redraws the pane
//! from scratch on every render call.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI for a pane of `rows` x `cols` to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_shell(&viewmodel, &state.theme, cols, rows);
}
