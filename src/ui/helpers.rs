//! Shared rendering utilities and helpers.
//!
//! Low-level text utilities used by several components: cursor placement,
//! width fitting and search match highlighting. Everything here works on
//! character counts, not bytes, so multi-byte input lines up.

use crate::ui::theme::Theme;

/// Moves the cursor to `row`/`col` (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to `cols` characters and pads it with spaces to exactly `cols`.
#[must_use]
pub fn fit(text: &str, cols: usize) -> String {
    let mut out: String = text.chars().take(cols).collect();
    let used = width(&out);
    out.push_str(&" ".repeat(cols - used));
    out
}

/// Centers `text` in a line of `cols` characters, cutting it when too long.
#[must_use]
pub fn centered(text: &str, cols: usize) -> String {
    let cut: String = text.chars().take(cols).collect();
    let padding = (cols - width(&cut)) / 2;
    fit(&format!("{}{cut}", " ".repeat(padding)), cols)
}

/// Styles the character ranges of `text` that matched the search query.
///
/// Ranges are `(start, end)` character indices, exclusive end, sorted and
/// non-overlapping. After each highlighted section the `base` style is applied
/// again so the rest of the line keeps its colors.
#[must_use]
pub fn highlighted(text: &str, ranges: &[(usize, usize)], theme: &Theme, base: &str) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(base);

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_pads_and_cuts_by_characters() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 3), "abc");
        assert_eq!(fit("äöü", 4), "äöü ");
    }

    #[test]
    fn centered_splits_padding() {
        assert_eq!(centered("ab", 6), "  ab  ");
        assert_eq!(centered("abc", 6), " abc  ");
        assert_eq!(centered("toolong", 3), "too");
    }

    #[test]
    fn highlighted_wraps_matches_and_restores_base() {
        let theme = Theme::default();
        let hl = format!(
            "{}{}",
            Theme::fg(&theme.colors.match_highlight_fg),
            Theme::bg(&theme.colors.match_highlight_bg)
        );
        let out = highlighted("Weekly standup", &[(7, 14)], &theme, "<base>");
        assert_eq!(out, format!("Weekly {hl}standup{}<base>", Theme::reset()));
    }

    #[test]
    fn highlighted_without_ranges_is_plain() {
        let theme = Theme::default();
        assert_eq!(highlighted("plain", &[], &theme, ""), "plain");
        assert_eq!(highlighted("ab", &[(5, 9)], &theme, ""), "ab");
    }
}
