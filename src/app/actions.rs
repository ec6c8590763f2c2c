//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each input. All state
//! changes happen inside the handler; actions only cover what needs the Zellij host.

/// Commands executed by the plugin shim after an input was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user explicitly asks to leave (pressing 'q').
    CloseFocus,

    /// Renames the plugin pane, the way a page sets its document title.
    ///
    /// Emitted after a navigation changed the current path.
    RenamePane {
        /// New pane title.
        title: String,
    },
}
