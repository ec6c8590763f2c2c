//! Search bar component renderer.
//!
//! This module renders the `Search Events` heading and the bordered input box
//! holding the query.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search heading and the 3-line search box below it.
///
/// # Returns
///
/// The next available row position (row + 4)
///
/// # Layout
///
/// ```text
/// Search Events
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ Search by title or descri... │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
///
/// The placeholder is shown dimmed while the query is empty. The border takes
/// the focus color while the box is being typed into.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading_fg));
    print!("{}", fit(&search.heading, cols));
    print!("{}", Theme::reset());

    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.focus_fg)
    } else {
        Theme::fg(&theme.colors.search_bar_border)
    };
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(row + 1, 1);
    print!("{margin}{border}┌{}┐{}", "─".repeat(inner_width), Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}{border}│");
    if search.query.is_empty() && !search.is_focused {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(&format!(" {}", search.placeholder), inner_width));
        print!("{}", Theme::reset());
    } else {
        let cursor = if search.is_focused { "█" } else { "" };
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", fit(&format!(" {}{cursor}", search.query), inner_width));
    }
    print!("{border}│{}", Theme::reset());

    position_cursor(row + 3, 1);
    print!("{margin}{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());

    row + 4
}
