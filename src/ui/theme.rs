//! Theme management and ANSI escape sequence generation.
//!
//! Themes are small TOML documents mapping UI roles to hex colors. Two are
//! compiled into the plugin; any other can be loaded from a file named in the
//! plugin configuration.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! brand_fg = "#cba6f7"
//! nav_fg = "#bac2de"
//! active_link_fg = "#1e1e2e"
//! active_link_bg = "#89b4fa"
//! heading_fg = "#cdd6f4"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! label_fg = "#89b4fa"
//! focus_fg = "#f5c2e7"
//! required_fg = "#f38ba8"
//! button_fg = "#1e1e2e"
//! button_bg = "#a6e3a1"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! editing_fg = "#fab387"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! `nav_bg` is optional; without it the navigation bar uses the terminal
//! background.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{EventDeskError, Result};

/// Name of the theme used when nothing else is configured.
pub const DEFAULT_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Brand text in the navigation bar.
    pub brand_fg: String,
    /// Inactive navigation links.
    pub nav_fg: String,
    #[serde(default)]
    pub nav_bg: Option<String>,
    /// Link for the current route.
    pub active_link_fg: String,
    pub active_link_bg: String,

    /// Page and section headings.
    pub heading_fg: String,

    pub text_normal: String,
    /// Placeholders, footer and secondary info.
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Form labels and event card labels.
    pub label_fg: String,
    /// Marker and value color of the focused input.
    pub focus_fg: String,
    /// Required-field marker.
    pub required_fg: String,

    /// Submit button.
    pub button_fg: String,
    pub button_bg: String,

    /// Selected event card title.
    pub selection_fg: String,
    pub selection_bg: String,
    /// Marker on the card that the form is editing.
    pub editing_fg: String,

    pub search_bar_border: String,
    /// Search match highlight.
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// Empty list message color.
    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name. Returns `None` for unknown names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`EventDeskError::Theme`] if the file cannot be read or is not a
    /// complete theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            EventDeskError::Theme(format!("failed to read {}: {e}", path.display()))
        })?;

        toml::from_str(&contents).map_err(|e| {
            EventDeskError::Theme(format!("failed to parse {}: {e}", path.display()))
        })
    }

    /// Picks the theme for a configuration: a theme file wins over a theme name,
    /// and anything that fails to load falls back to the default.
    #[must_use]
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Self {
        if let Some(path) = file {
            match Self::from_file(path) {
                Ok(theme) => return theme,
                Err(e) => tracing::warn!(error = %e, "custom theme unavailable, using built-in"),
            }
        }

        match name {
            Some(name) => Self::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme = %name, "unknown theme name, using default");
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Converts a hex color to an RGB tuple. Malformed input yields white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`) for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`) for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        assert_eq!(latte.name, "catppuccin-latte");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn hex_colors_become_ansi_escapes() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("#abc"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::fg("#zz0000"), "\u{1b}[38;2;255;0;0m");
    }

    #[test]
    fn custom_theme_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        theme.colors.brand_fg = "#010203".to_string();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn broken_theme_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"name = \"half\"\n[colors]\nbrand_fg = \"#000000\"\n").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(EventDeskError::Theme(_))));
        assert!(matches!(
            Theme::from_file("/definitely/not/here.toml"),
            Err(EventDeskError::Theme(_))
        ));
    }

    #[test]
    fn resolve_prefers_file_then_name_then_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        let mut custom = Theme::default();
        custom.name = "from-file".to_string();
        fs::write(&path, toml::to_string(&custom).unwrap()).unwrap();

        assert_eq!(Theme::resolve(Some("catppuccin-latte"), Some(&path)).name, "from-file");
        let missing = dir.path().join("missing.toml");
        assert_eq!(
            Theme::resolve(Some("catppuccin-latte"), Some(&missing)).name,
            "catppuccin-latte"
        );
        assert_eq!(Theme::resolve(Some("nope"), None).name, DEFAULT_THEME);
        assert_eq!(Theme::resolve(None, None).name, DEFAULT_THEME);
    }
}
