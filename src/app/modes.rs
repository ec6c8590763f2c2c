//! Input mode state for the application.
//!
//! The input mode decides how keystrokes are interpreted and which footer hints
//! are shown:
//! - **Normal**: navigation bar, list selection and commands
//! - **Form**: typing into one form field
//! - **Search**: typing the search query

use crate::domain::Field;

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    ///
    /// Keybindings: 1/2 and Tab (navigate), j/k (select), e (edit), d (delete),
    /// a (add), / (search), x (cancel edit), q (quit).
    Normal,

    /// Typing into the contained form field.
    ///
    /// Tab/Shift+Tab move between fields, Ctrl+s submits, Esc leaves the form.
    Form(Field),

    /// Typing the search query.
    ///
    /// Characters extend the query, Ctrl+u clears it, Esc or Enter leaves.
    Search,
}

impl InputMode {
    /// Field being typed into, if any.
    #[must_use]
    pub const fn focused_field(self) -> Option<Field> {
        match self {
            Self::Form(field) => Some(field),
            Self::Normal | Self::Search => None,
        }
    }
}
