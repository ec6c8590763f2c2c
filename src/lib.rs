//! EventDesk: a Zellij plugin for keeping a list of events at hand.
//!
//! EventDesk manages calendar-like events (title, description, category, time
//! window, duration, priority, contact details) in plugin memory:
//! - Create events from a keyboard-driven form
//! - Edit and delete existing events
//! - Filter the list by a case-insensitive substring of title or description
//! - Switch between a welcome view and the management view from a navigation bar
//!
//! Nothing is persisted; the list lives as long as the plugin instance.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Input handling and routes                        │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────────────┐   ┌──────────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain Layer (domain/)   │
//! │ - Rendering           │   │ - Event, Priority, Id    │
//! │ - Theming             │   │ - Form draft             │
//! │ - Components          │   │ - Error types            │
//! └───────────────────────┘   └──────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (paths) and Observability (tracing) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/eventdesk.wasm" {
//!         theme "catppuccin-latte"
//!         theme_file "~/.config/eventdesk/theme.toml"
//!         trace_level "debug"
//!         start_path "/events"
//!     }
//! }
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Input, InputMode, Route, SubmitOutcome};
pub use domain::{Draft, Event, EventDeskError, EventId, Field, Priority, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Trace level used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` loads.
    pub theme_name: Option<String>,

    /// Custom TOML theme file, with `~` already expanded to `/host`.
    pub theme_file: Option<PathBuf>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: String,

    /// Path shown when the plugin opens. Default: `"/"`
    pub start_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: DEFAULT_TRACE_LEVEL.to_string(),
            start_path: Route::Home.path().to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Recognized keys: `theme`, `theme_file`, `trace_level`, `start_path`.
    /// Blank values count as absent; unknown keys are ignored.
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            theme_name: get("theme").map(String::from),
            theme_file: get("theme_file").map(infrastructure::expand_tilde),
            trace_level: get("trace_level").map_or(defaults.trace_level, String::from),
            start_path: get("start_path").map_or(defaults.start_path, String::from),
        }
    }
}

/// Builds the initial application state: empty event list, configured theme,
/// configured start path.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(start_path = %config.start_path, "initializing eventdesk plugin");

    let theme = Theme::resolve(config.theme_name.as_deref(), config.theme_file.as_deref());
    AppState::new(theme, &config.start_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_configuration_uses_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
        let blank = map(&[("theme", "  "), ("start_path", "")]);
        assert_eq!(Config::from_zellij(&blank), Config::default());
    }

    #[test]
    fn configuration_keys_are_parsed() {
        let config = Config::from_zellij(&map(&[
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/themes/mine.toml"),
            ("trace_level", "debug"),
            ("start_path", "/events"),
            ("unrelated", "x"),
        ]));

        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file, Some(PathBuf::from("/host/themes/mine.toml")));
        assert_eq!(config.trace_level, "debug");
        assert_eq!(config.start_path, "/events");
    }

    #[test]
    fn initialize_applies_theme_and_start_path() {
        let config = Config {
            theme_name: Some("catppuccin-latte".to_string()),
            start_path: "/events".to_string(),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.route(), Some(Route::Events));
        assert!(state.events.is_empty());
    }

    #[test]
    fn missing_theme_file_falls_back() {
        let config = Config {
            theme_file: Some(PathBuf::from("/no/such/theme.toml")),
            ..Config::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
