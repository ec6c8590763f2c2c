//! Add/edit form component renderer.
//!
//! One row per field, in form order, followed by the submit button:
//!
//! ```text
//! Add Event
//!   ▸ Title              * Team Sync█
//!     Description        * Event Description
//!     Category             Category
//!     ...
//!     Priority             ◂ Low ▸
//!   [ Add Event ]
//! ```
//!
//! Empty fields show their placeholder dimmed. Required fields carry a `*`.
//! Multi-line descriptions are shown flattened to one line.

use crate::domain::FieldKind;
use crate::ui::helpers::{fit, position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormFieldItem, FormInfo};

/// Width of the label column.
const LABEL_WIDTH: usize = 18;

/// Columns before the value: indent, focus marker, label, required marker.
const VALUE_COLUMN: usize = 4 + LABEL_WIDTH + 2;

/// Renders the form title, the field rows and the submit button.
///
/// # Returns
///
/// The next available row position (row + 2 + number of fields)
pub fn render_form(row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.heading_fg));
    print!("{}", fit(&form.title, cols));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for field in &form.fields {
        current_row = render_field(current_row, field, theme, cols);
    }

    render_submit_button(current_row, form, theme, cols)
}

fn render_field(row: usize, field: &FormFieldItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if field.is_focused {
        print!("  {}▸ ", Theme::fg(&theme.colors.focus_fg));
    } else {
        print!("    ");
    }

    print!("{}", Theme::fg(&theme.colors.label_fg));
    print!("{}", fit(&field.label, LABEL_WIDTH));

    if field.is_required {
        print!("{}* ", Theme::fg(&theme.colors.required_fg));
    } else {
        print!("  ");
    }

    let value_width = cols.saturating_sub(VALUE_COLUMN);
    let shown = if field.kind == FieldKind::Choice {
        if field.is_focused {
            format!("◂ {} ▸", field.value)
        } else {
            field.value.clone()
        }
    } else if field.value.is_empty() && !field.is_focused {
        String::new()
    } else if field.is_focused {
        format!("{}█", tail(&field.value, value_width.saturating_sub(1)))
    } else {
        field.value.clone()
    };

    if shown.is_empty() {
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{}", fit(&field.placeholder, value_width));
    } else {
        let color = if field.is_focused {
            &theme.colors.focus_fg
        } else {
            &theme.colors.text_normal
        };
        print!("{}", Theme::fg(color));
        print!("{}", fit(&shown, value_width));
    }

    print!("{}", Theme::reset());
    row + 1
}

fn render_submit_button(row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let button = format!("[ {} ]", form.submit_label);

    position_cursor(row, 1);
    print!("  ");
    print!(
        "{}{}{}{button}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.button_fg),
        Theme::bg(&theme.colors.button_bg),
        Theme::reset()
    );

    let mut used = 2 + width(&button);
    if form.is_editing {
        let hint = "  Ctrl+s: save  x: cancel";
        print!("{}{}{hint}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        used += width(hint);
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}

/// Last `max` characters of `text`, so the cursor end stays visible.
fn tail(text: &str, max: usize) -> String {
    let len = width(text);
    text.chars().skip(len.saturating_sub(max)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_keeps_the_end() {
        assert_eq!(tail("abcdef", 3), "def");
        assert_eq!(tail("ab", 5), "ab");
        assert_eq!(tail("abc", 0), "");
    }
}
