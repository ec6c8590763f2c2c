//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the EventDesk library and the
//! Zellij plugin system. It decodes key presses into library [`Input`]s, runs the
//! returned [`Action`]s against the Zellij API and forwards render calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `PermissionRequestResult` events
//! 3. **Update**: Map keys to inputs, delegate to the library, run actions
//! 4. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+s`: Submit the form
//!
//! In normal mode:
//! - `1`/`2`: Home / Manage Events
//! - `Tab`: Next navigation link
//! - `j`/`Down`, `k`/`Up`: Select event
//! - `e`/`Enter`: Edit selected event
//! - `d`: Delete selected event
//! - `a`/`i`: Type into the form
//! - `/`: Type into the search box
//! - `x`: Cancel editing
//! - `Esc`: Clear the search
//! - `q`: Hide the plugin
//!
//! In the form:
//! - `Tab`/`Down`, `Shift+Tab`/`Up`: Next / previous field
//! - `Left`/`Right`/`Space`: Change priority
//! - `Enter`: New line in the description, next field elsewhere
//! - `Esc`: Leave the form (the draft is kept)
//!
//! In the search box:
//! - `Ctrl+u`: Clear the query
//! - `Enter`/`Esc`: Leave the search box

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use eventdesk::{handle_event, Action, Config, Input, InputMode, Route};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: eventdesk::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: eventdesk::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, requests the
    /// permission needed to rename the pane and subscribes to key events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        eventdesk::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = eventdesk::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[EventType::Key, EventType::PermissionRequestResult]);

        tracing::debug!("plugin load complete");
    }

    /// Handles incoming Zellij events. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let input = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(input) => input,
                None => return false,
            },
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                self.handle_permission_result(status);
                return false;
            }
            _ => return false,
        };

        let span = tracing::debug_span!("plugin_update", input = ?input);
        let _guard = span.entered();

        match handle_event(&mut self.app, &input) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "input handled"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling input");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        eventdesk::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps a key press to an input for the current input mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Input> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);
        let alt = key.has_modifiers(&[KeyModifier::Alt]);
        let shift = key.has_modifiers(&[KeyModifier::Shift]);

        if ctrl && key.bare_key == BareKey::Char('s') {
            return Some(Input::Submit);
        }

        match self.app.input_mode {
            InputMode::Normal => Self::map_normal_key(key, ctrl || alt),
            InputMode::Form(_) => Some(match key.bare_key {
                BareKey::Tab if shift => Input::PreviousField,
                BareKey::Tab | BareKey::Down => Input::NextField,
                BareKey::Up => Input::PreviousField,
                BareKey::Left => Input::CyclePriority { forward: false },
                BareKey::Right => Input::CyclePriority { forward: true },
                BareKey::Enter => Input::Enter,
                BareKey::Backspace => Input::Backspace,
                BareKey::Esc => Input::Blur,
                BareKey::Char(c) if !ctrl && !alt => Input::Char(c),
                _ => return None,
            }),
            InputMode::Search => Some(match key.bare_key {
                BareKey::Char('u') if ctrl => Input::ClearSearch,
                BareKey::Enter | BareKey::Esc => Input::Blur,
                BareKey::Backspace => Input::Backspace,
                BareKey::Char(c) if !ctrl && !alt => Input::Char(c),
                _ => return None,
            }),
        }
    }

    fn map_normal_key(key: &KeyWithModifier, modified: bool) -> Option<Input> {
        if modified {
            return None;
        }

        if let BareKey::Char(c) = key.bare_key {
            if let Some(route) = Route::ALL.into_iter().find(|r| r.hotkey() == c) {
                return Some(Input::Navigate(route.path().to_string()));
            }
        }

        Some(match key.bare_key {
            BareKey::Tab => Input::NextLink,
            BareKey::Down | BareKey::Char('j') => Input::SelectNext,
            BareKey::Up | BareKey::Char('k') => Input::SelectPrevious,
            BareKey::Enter | BareKey::Char('e') => Input::EditSelected,
            BareKey::Char('d') => Input::DeleteSelected,
            BareKey::Char('a' | 'i') => Input::FocusForm,
            BareKey::Char('/') => Input::FocusSearch,
            BareKey::Char('x') => Input::CancelEdit,
            BareKey::Esc => Input::ClearSearch,
            BareKey::Char('q') => Input::CloseFocus,
            _ => return None,
        })
    }

    /// Names the pane after the current route once renaming is allowed.
    fn handle_permission_result(&self, status: PermissionStatus) {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("permissions granted");
                Self::execute_action(&Action::RenamePane {
                    title: Route::pane_title(self.app.route()),
                });
            }
            PermissionStatus::Denied => {
                tracing::warn!("permissions denied - pane title will not follow navigation");
            }
        }
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
            Action::RenamePane { title } => {
                let plugin_id = get_plugin_ids().plugin_id;
                tracing::debug!(plugin_id = plugin_id, title = %title, "renaming pane");
                rename_plugin_pane(plugin_id, title);
            }
        }
    }
}
