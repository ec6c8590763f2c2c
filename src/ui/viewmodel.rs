//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) via
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready data
//! only: formatted strings, highlight ranges and selection flags.
//!
//! ```text
//! UIViewModel
//! ├── NavBarInfo          brand + links, always present
//! ├── Option<PageView>    None when the path matches no route
//! │   ├── Home(HomeInfo)
//! │   └── Events(EventsPage)
//! │       ├── FormInfo
//! │       ├── SearchBarInfo
//! │       └── ListInfo → EventCard*, EmptyState
//! └── FooterInfo
//! ```

use crate::domain::FieldKind;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Persistent navigation bar.
    pub nav: NavBarInfo,

    /// Page for the current route. `None` for unmatched paths.
    pub page: Option<PageView>,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Navigation bar display information.
#[derive(Debug, Clone)]
pub struct NavBarInfo {
    /// Brand text at the left edge.
    pub brand: String,

    /// Links in display order.
    pub links: Vec<NavLinkItem>,
}

/// One navigation link.
#[derive(Debug, Clone)]
pub struct NavLinkItem {
    pub label: String,
    /// Key that follows the link.
    pub hotkey: char,
    /// Whether this link targets the current path.
    pub is_active: bool,
}

/// Page content for a matched route.
#[derive(Debug, Clone)]
pub enum PageView {
    Home(HomeInfo),
    Events(EventsPage),
}

/// Static welcome page.
#[derive(Debug, Clone)]
pub struct HomeInfo {
    pub heading: String,
    pub body: String,
}

/// Event management page.
#[derive(Debug, Clone)]
pub struct EventsPage {
    pub heading: String,
    pub form: FormInfo,
    pub search_bar: SearchBarInfo,
    pub list: ListInfo,
}

/// Add/edit form.
#[derive(Debug, Clone)]
pub struct FormInfo {
    /// `Add Event` or `Edit Event`.
    pub title: String,
    pub fields: Vec<FormFieldItem>,
    /// `Add Event` or `Update Event`.
    pub submit_label: String,
    /// Whether the form is bound to an existing event.
    pub is_editing: bool,
}

/// One form field row.
#[derive(Debug, Clone)]
pub struct FormFieldItem {
    pub label: String,
    /// Current value, flattened to one line.
    pub value: String,
    /// Shown dimmed while `value` is empty.
    pub placeholder: String,
    pub kind: FieldKind,
    pub is_required: bool,
    pub is_focused: bool,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Section heading above the box.
    pub heading: String,
    /// Current search query text.
    pub query: String,
    /// Shown dimmed while `query` is empty.
    pub placeholder: String,
    pub is_focused: bool,
}

/// The filtered event list.
#[derive(Debug, Clone)]
pub struct ListInfo {
    pub heading: String,
    /// Cards inside the visible window.
    pub cards: Vec<EventCard>,
    /// `first-last of total` when only part of the list fits.
    pub window_label: Option<String>,
    /// Present when the filtered list is empty.
    pub empty_state: Option<EmptyState>,
}

/// Display information for a single event.
#[derive(Debug, Clone)]
pub struct EventCard {
    pub short_id: String,
    pub title: String,
    /// Character ranges of `title` matching the search query.
    pub title_highlights: Vec<(usize, usize)>,
    /// Description flattened to one line.
    pub description: String,
    /// Character ranges of `description` matching the search query.
    pub description_highlights: Vec<(usize, usize)>,
    pub category: String,
    pub time_slot: String,
    pub duration: String,
    pub priority: String,
    pub email: String,
    pub phone: String,
    pub is_selected: bool,
    /// Whether the form currently edits this event.
    pub is_being_edited: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "q: quit  /: search").
    pub keybindings: String,
}

/// Message shown in place of the list when nothing matches.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
}
