//! Event list component renderer.
//!
//! Each event is drawn as a card of [`CARD_ROWS`] rows:
//!
//! ```text
//! ▶ Team Sync                                  3f2a9c1e
//!     Description: Weekly standup
//!     Category: Work   Time Slot: 09:00 - 09:30   Duration: 1 hours
//!     Priority: Low   Contact Email: a@b.com   Contact Phone: 555-1234
//!
//! ```
//!
//! The selected card's title row uses the selection colors; search matches in
//! the title and description are highlighted.

use crate::app::state::CARD_ROWS;
use crate::ui::helpers::{fit, highlighted, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EventCard, ListInfo};

/// Indent of the detail rows below the title.
const DETAIL_INDENT: usize = 4;

/// Renders the list heading, with the window position on the right when only
/// part of the list is visible.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_list_heading(row: usize, list: &ListInfo, theme: &Theme, cols: usize) -> usize {
    let label = list.window_label.as_deref().unwrap_or("");
    let heading_width = cols.saturating_sub(width(label));

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading_fg));
    print!("{}", fit(&list.heading, heading_width));
    print!("{}", Theme::reset());
    print!("{}{label}{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
    row + 1
}

/// Renders every card in the visible window.
///
/// # Returns
///
/// The next available row position (row + cards * [`CARD_ROWS`])
pub fn render_cards(row: usize, cards: &[EventCard], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(current_row, card, theme, cols);
    }
    current_row
}

fn render_card(row: usize, card: &EventCard, theme: &Theme, cols: usize) -> usize {
    render_title_row(row, card, theme, cols);

    position_cursor(row + 1, 1);
    let indent = " ".repeat(DETAIL_INDENT);
    let label = "Description: ";
    print!("{indent}{}{label}", Theme::fg(&theme.colors.label_fg));
    let normal = Theme::fg(&theme.colors.text_normal);
    print!(
        "{normal}{}",
        highlighted(&card.description, &card.description_highlights, theme, &normal)
    );
    let used = DETAIL_INDENT + width(label) + width(&card.description);
    print!("{}{}", " ".repeat(cols.saturating_sub(used)), Theme::reset());

    let duration = format!("{} hours", card.duration);
    render_pairs(
        row + 2,
        &[
            ("Category", card.category.as_str()),
            ("Time Slot", card.time_slot.as_str()),
            ("Duration", duration.as_str()),
        ],
        theme,
        cols,
    );
    render_pairs(
        row + 3,
        &[
            ("Priority", card.priority.as_str()),
            ("Contact Email", card.email.as_str()),
            ("Contact Phone", card.phone.as_str()),
        ],
        theme,
        cols,
    );

    position_cursor(row + 4, 1);
    print!("{}", " ".repeat(cols));

    row + CARD_ROWS
}

fn render_title_row(row: usize, card: &EventCard, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    let base = if card.is_selected {
        format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal))
    };

    let marker = if card.is_selected { "▶ " } else { "  " };
    print!("{base}{marker}");
    print!("{}", highlighted(&card.title, &card.title_highlights, theme, &base));
    let mut used = width(marker) + width(&card.title);

    if card.is_being_edited {
        let tag = "  [editing]";
        print!("{}{tag}{base}", Theme::fg(&theme.colors.editing_fg));
        used += width(tag);
    }

    let id = format!(" {}", card.short_id);
    let gap = cols.saturating_sub(used + width(&id));
    print!("{}", " ".repeat(gap));
    if used + width(&id) <= cols {
        print!("{}{id}", Theme::dim());
    }
    print!("{}", Theme::reset());
}

/// Renders `Label: value` pairs on one row, dropping whatever does not fit.
fn render_pairs(row: usize, pairs: &[(&str, &str)], theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", " ".repeat(DETAIL_INDENT));

    let mut used = DETAIL_INDENT;
    for (i, (label, value)) in pairs.iter().enumerate() {
        let sep = if i == 0 { "" } else { "   " };
        let label = format!("{sep}{label}: ");
        let room = cols.saturating_sub(used + width(&label));
        if room == 0 {
            break;
        }
        let value = fit(value, width(value).min(room));
        print!("{}{label}", Theme::fg(&theme.colors.label_fg));
        print!("{}{value}", Theme::fg(&theme.colors.text_normal));
        used += width(&label) + width(&value);
    }

    print!("{}{}", " ".repeat(cols.saturating_sub(used)), Theme::reset());
}
