//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process: compute the view model from state, then
//! hand it to the component layout.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_layout → ANSI Output
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Does not clear the screen; every component pads its lines to the full
/// width instead.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let _span = tracing::trace_span!("render", rows, cols).entered();
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
