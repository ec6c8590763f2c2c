//! Composable UI component renderers.
//!
//! Each component prints one part of the interface starting at a given row and
//! returns the next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`nav`]: Navigation bar with brand and route links
//! - [`home`]: Welcome page
//! - [`form`]: Add/edit form with submit button
//! - [`search`]: Search heading and input box
//! - [`list`]: Event list heading and cards
//! - [`empty`]: Message for an empty list
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! Every page shares the shell: navigation bar and border at the top, border
//! and footer at the bottom. [`render_shell`] fills the middle with the page for
//! the current route, or leaves it blank when the path matches none.

mod empty;
mod footer;
mod form;
mod home;
mod list;
mod nav;
mod search;

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EventsPage, PageView, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use home::render_home;
use list::{render_cards, render_list_heading};
use nav::render_nav;
use search::render_search_bar;

/// Renders a horizontal border line at `row`.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full interface.
///
/// ```text
/// [Navigation bar]
/// [Border]
/// [Page for the current route, if any]
/// [Border]
/// [Footer]
/// ```
pub fn render_shell(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 1;
    current_row = render_nav(current_row, &vm.nav, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    match &vm.page {
        Some(PageView::Home(home)) => {
            render_home(current_row, home, theme, cols);
        }
        Some(PageView::Events(page)) => {
            render_events_page(current_row, page, theme, cols);
        }
        None => {}
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the management page.
///
/// ```text
/// [Heading]
/// [Form title, one row per field, submit button]
/// [Search heading + 3-line search box]
/// [List heading]
/// [Event cards or empty state]
/// ```
fn render_events_page(row: usize, page: &EventsPage, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading_fg));
    print!("{}", fit(&page.heading, cols));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    current_row = render_form(current_row, &page.form, theme, cols);
    current_row = render_search_bar(current_row, &page.search_bar, theme, cols);
    current_row = render_list_heading(current_row, &page.list, theme, cols);

    match &page.list.empty_state {
        Some(empty) => render_empty_state(current_row, empty, theme, cols),
        None => render_cards(current_row, &page.list.cards, theme, cols),
    }
}
