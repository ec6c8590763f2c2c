//! Empty state component renderer.
//!
//! Shown in place of the event cards when the filtered list is empty, whether
//! because no event exists yet or because nothing matches the query.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message centered, one blank row below `row`.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", centered(&empty.message, cols));
    print!("{}", Theme::reset());
    row + 2
}
