//! Navigation bar component renderer.

use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NavBarInfo;

/// Renders the navigation bar on a single row.
///
/// ```text
///  Event Management   1 Home   2 Manage Events
/// ```
///
/// The link for the current route is drawn in the active link colors. The
/// whole row carries `nav_bg` when the theme defines one.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_nav(row: usize, nav: &NavBarInfo, theme: &Theme, cols: usize) -> usize {
    let base = match &theme.colors.nav_bg {
        Some(bg) => Theme::bg(bg),
        None => String::new(),
    };

    position_cursor(row, 1);
    print!("{base}");

    let brand = format!(" {} ", nav.brand);
    let mut used = width(&brand);
    print!("{}{}{brand}{}{base}", Theme::bold(), Theme::fg(&theme.colors.brand_fg), Theme::reset());

    for link in &nav.links {
        let text = format!(" {} {} ", link.hotkey, link.label);
        if used + 2 + width(&text) > cols {
            break;
        }
        print!("  ");
        if link.is_active {
            print!(
                "{}{}{}{text}",
                Theme::bold(),
                Theme::fg(&theme.colors.active_link_fg),
                Theme::bg(&theme.colors.active_link_bg)
            );
        } else {
            print!("{}{text}", Theme::fg(&theme.colors.nav_fg));
        }
        print!("{}{base}", Theme::reset());
        used += 2 + width(&text);
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
