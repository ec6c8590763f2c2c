//! Welcome page component renderer.

use crate::ui::helpers::{centered, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HomeInfo;

/// Blank rows between the navigation bar and the heading.
const TOP_MARGIN: usize = 3;

/// Renders the welcome heading and its line of body text, centered.
///
/// # Returns
///
/// The next available row position
pub fn render_home(row: usize, home: &HomeInfo, theme: &Theme, cols: usize) -> usize {
    let heading_row = row + TOP_MARGIN;

    position_cursor(heading_row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading_fg));
    print!("{}", centered(&home.heading, cols));
    print!("{}", Theme::reset());

    position_cursor(heading_row + 2, 1);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", centered(&home.body, cols));
    print!("{}", Theme::reset());

    heading_row + 3
}
