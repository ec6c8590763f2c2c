//! Application state, state transitions and view model computation.
//!
//! [`AppState`] is the single owner of everything the plugin knows: the event
//! collection, the form draft with its edit target, the search query, the current
//! path and the input mode. The four management operations (submit, delete, begin
//! edit, search) are plain methods on it; the event handler calls them in response
//! to keystrokes.
//!
//! # Derived State
//!
//! The filtered list is never stored. It is recomputed from the collection and the
//! query whenever it is needed, so it cannot drift from either. The selection is an
//! index into that derived list and is clamped after every change.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a
//! [`UIViewModel`](crate::ui::viewmodel::UIViewModel): navigation bar, current page
//! and footer, with the event list windowed around the selection.

use super::modes::InputMode;
use super::routes::{Route, BRAND};
use crate::domain::{Draft, Event, EventDeskError, EventId, Field, Result};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, EventCard, EventsPage, FooterInfo, FormFieldItem, FormInfo, HomeInfo, ListInfo,
    NavBarInfo, NavLinkItem, PageView, SearchBarInfo, UIViewModel,
};

/// Rows used by the navigation bar (links + border).
const NAV_ROWS: usize = 2;

/// Rows used by the footer (border + hints).
const FOOTER_ROWS: usize = 2;

/// Rows of the management page above the list: heading, form title, one row per
/// field, submit button, search heading, 3-row search box, list heading.
const EVENTS_PAGE_ROWS: usize = 1 + 1 + Field::ALL.len() + 1 + 1 + 3 + 1;

/// Rows per event card including the spacer below it.
pub const CARD_ROWS: usize = 5;

/// Result of a successful submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new event was appended.
    Added(EventId),
    /// The edit target was replaced in place.
    Updated(EventId),
    /// The edit target no longer exists. Nothing was added or replaced.
    Stale(EventId),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Every event, in creation order. Identifiers are unique.
    pub events: Vec<Event>,

    /// Staged form values and the edit target.
    pub draft: Draft,

    /// Current search query. Independent of the draft.
    pub search_query: String,

    /// Current location. May match no route.
    pub current_path: String,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Zero-based index of the selected event within the filtered list.
    pub selected_index: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state showing `start_path`.
    #[must_use]
    pub fn new(theme: Theme, start_path: &str) -> Self {
        Self {
            events: Vec::new(),
            draft: Draft::default(),
            search_query: String::new(),
            current_path: start_path.to_string(),
            input_mode: InputMode::Normal,
            selected_index: 0,
            theme,
        }
    }

    /// Route for the current path, if it matches one.
    #[must_use]
    pub fn route(&self) -> Option<Route> {
        Route::resolve(&self.current_path)
    }

    /// Moves to `path` and returns the route it resolves to.
    ///
    /// Leaves any text input. Event, draft and search state survive navigation.
    pub fn navigate(&mut self, path: &str) -> Option<Route> {
        self.current_path = path.to_string();
        self.input_mode = InputMode::Normal;
        self.route()
    }

    /// Events whose title or description contains the query, ignoring case.
    #[must_use]
    pub fn filtered_events(&self) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.matches(&self.search_query))
            .collect()
    }

    /// Currently selected event in the filtered list.
    #[must_use]
    pub fn selected_event(&self) -> Option<&Event> {
        self.filtered_events().get(self.selected_index).copied()
    }

    /// Looks up an event by identifier.
    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Commits the draft.
    ///
    /// Without an edit target a new event is appended. With one, the event carrying
    /// that identifier is replaced and every other event is left untouched. On
    /// success the draft resets to its defaults and the selection is kept inside
    /// the filtered list, which an update can shrink.
    ///
    /// # Errors
    ///
    /// Returns [`EventDeskError::MissingFields`] when a required field is empty.
    /// The collection and the draft are unchanged in that case.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        let id = self.draft.editing.unwrap_or_else(EventId::new);
        let event = self.draft.to_event(id)?;

        let outcome = if self.draft.editing.is_some() {
            match self.events.iter_mut().find(|e| e.id == id) {
                Some(slot) => {
                    *slot = event;
                    SubmitOutcome::Updated(id)
                }
                None => SubmitOutcome::Stale(id),
            }
        } else {
            self.events.push(event);
            SubmitOutcome::Added(id)
        };

        self.draft.clear();
        self.clamp_selection();
        tracing::debug!(event_id = %id, outcome = ?outcome, total = self.events.len(), "draft submitted");
        Ok(outcome)
    }

    /// Removes the event with `id`. Returns `false` if there was none.
    pub fn delete(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        let removed = self.events.len() != before;
        if removed {
            self.clamp_selection();
        }
        tracing::debug!(event_id = %id, removed = removed, "delete requested");
        removed
    }

    /// Loads the event with `id` into the draft and makes it the edit target.
    ///
    /// # Errors
    ///
    /// Returns [`EventDeskError::UnknownEvent`] when no event has that identifier.
    pub fn begin_edit(&mut self, id: EventId) -> Result<()> {
        let event = self
            .event(id)
            .cloned()
            .ok_or(EventDeskError::UnknownEvent(id))?;
        self.draft.load(&event);
        tracing::debug!(event_id = %id, "editing event");
        Ok(())
    }

    /// Drops the draft and the edit target. The collection is not touched.
    pub fn cancel_edit(&mut self) {
        self.draft.clear();
    }

    /// Replaces the search query.
    pub fn set_search_query(&mut self, query: &str) {
        query.clone_into(&mut self.search_query);
        self.clamp_selection();
    }

    /// Moves selection down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.filtered_events().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves selection up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.filtered_events().len();
        if len == 0 {
            return;
        }
        self.selected_index = if self.selected_index == 0 {
            len - 1
        } else {
            self.selected_index - 1
        };
    }

    /// Selects the event with `id` if it is in the filtered list.
    pub fn select(&mut self, id: EventId) {
        if let Some(idx) = self.filtered_events().iter().position(|e| e.id == id) {
            self.selected_index = idx;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered_events().len();
        self.selected_index = if len == 0 {
            0
        } else {
            self.selected_index.min(len - 1)
        };
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let route = self.route();
        let page = route.map(|r| match r {
            Route::Home => PageView::Home(HomeInfo {
                heading: format!("Welcome to {BRAND}"),
                body: "Use the navigation bar to manage and view events.".to_string(),
            }),
            Route::Events => PageView::Events(self.compute_events_page(rows, cols)),
        });

        UIViewModel {
            nav: self.compute_nav(),
            page,
            footer: self.compute_footer(route),
        }
    }

    fn compute_nav(&self) -> NavBarInfo {
        let current = self.route();
        NavBarInfo {
            brand: BRAND.to_string(),
            links: Route::ALL
                .into_iter()
                .map(|r| NavLinkItem {
                    label: r.label().to_string(),
                    hotkey: r.hotkey(),
                    is_active: current == Some(r),
                })
                .collect(),
        }
    }

    fn compute_events_page(&self, rows: usize, cols: usize) -> EventsPage {
        let is_editing = self.draft.editing.is_some();
        let focused = self.input_mode.focused_field();

        let fields = Field::ALL
            .into_iter()
            .map(|field| FormFieldItem {
                label: field.label().to_string(),
                value: flatten(self.draft.value(field)),
                placeholder: field.placeholder().to_string(),
                kind: field.kind(),
                is_required: field.is_required(),
                is_focused: focused == Some(field),
            })
            .collect();

        let form = FormInfo {
            title: if is_editing { "Edit Event" } else { "Add Event" }.to_string(),
            fields,
            submit_label: if is_editing { "Update Event" } else { "Add Event" }.to_string(),
            is_editing,
        };

        let search_bar = SearchBarInfo {
            heading: "Search Events".to_string(),
            query: self.search_query.clone(),
            placeholder: "Search by title or description".to_string(),
            is_focused: self.input_mode == InputMode::Search,
        };

        EventsPage {
            heading: BRAND.to_string(),
            form,
            search_bar,
            list: self.compute_list(rows, cols),
        }
    }

    /// Windows the filtered list around the selection.
    ///
    /// The selected card sits in the middle of the window unless the window would
    /// run past either end of the list.
    fn compute_list(&self, rows: usize, cols: usize) -> ListInfo {
        let filtered = self.filtered_events();
        let heading = "Event List".to_string();

        if filtered.is_empty() {
            return ListInfo {
                heading,
                cards: vec![],
                window_label: None,
                empty_state: Some(EmptyState {
                    message: "No events available.".to_string(),
                }),
            };
        }

        let slots = Self::calculate_card_slots(rows).max(1);
        let mut visible_start = self.selected_index.saturating_sub(slots / 2);
        let visible_end = (visible_start + slots).min(filtered.len());
        if visible_end - visible_start < slots && filtered.len() >= slots {
            visible_start = visible_end.saturating_sub(slots);
        }

        let cards = filtered[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, event)| self.compute_card(event, visible_start + offset, cols))
            .collect();

        let window_label = (visible_end - visible_start < filtered.len()).then(|| {
            format!("{}-{} of {}", visible_start + 1, visible_end, filtered.len())
        });

        ListInfo {
            heading,
            cards,
            window_label,
            empty_state: None,
        }
    }

    fn compute_card(&self, event: &Event, absolute_idx: usize, cols: usize) -> EventCard {
        let title = truncate(&event.title, cols.saturating_sub(24));
        let description = truncate(&flatten(&event.description), cols.saturating_sub(18));

        EventCard {
            short_id: event.id.short(),
            title_highlights: match_ranges(&title, &self.search_query),
            title,
            description_highlights: match_ranges(&description, &self.search_query),
            description,
            category: event.category.clone(),
            time_slot: event.time_slot(),
            duration: event.duration.clone(),
            priority: event.priority.to_string(),
            email: event.email.clone(),
            phone: event.phone.clone(),
            is_selected: absolute_idx == self.selected_index,
            is_being_edited: self.draft.editing == Some(event.id),
        }
    }

    fn compute_footer(&self, route: Option<Route>) -> FooterInfo {
        let keybindings = match (self.input_mode, route) {
            (InputMode::Form(Field::Priority), _) => {
                "←/→ or Space: change priority  Tab/Shift+Tab: next/prev field  Ctrl+s: submit  Esc: leave form"
            }
            (InputMode::Form(Field::Description), _) => {
                "Enter: new line  Tab/Shift+Tab: next/prev field  Ctrl+s: submit  Esc: leave form"
            }
            (InputMode::Form(_), _) => {
                "Tab/Enter: next field  Shift+Tab: prev field  Ctrl+s: submit  Esc: leave form"
            }
            (InputMode::Search, _) => "Type to filter  Ctrl+u: clear  Enter/Esc: done",
            (InputMode::Normal, Some(Route::Events)) if self.draft.editing.is_some() => {
                "j/k: select  a: edit form  Ctrl+s: update  x: cancel edit  d: delete  /: search  1/2: navigate  q: quit"
            }
            (InputMode::Normal, Some(Route::Events)) => {
                "j/k: select  a: add  e: edit  d: delete  /: search  1/2: navigate  q: quit"
            }
            (InputMode::Normal, _) => "1: Home  2: Manage Events  Tab: next link  q: quit",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Number of event cards that fit below the form and search box.
    const fn calculate_card_slots(total_rows: usize) -> usize {
        total_rows.saturating_sub(NAV_ROWS + EVENTS_PAGE_ROWS + FOOTER_ROWS) / CARD_ROWS
    }
}

/// Replaces line breaks with spaces, keeping character positions stable.
fn flatten(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

/// Cuts `text` to at most `max` characters, ending in `...` when cut.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let keep = max.saturating_sub(3);
    format!("{}...", text.chars().take(keep).collect::<String>())
}

/// Non-overlapping, case-insensitive occurrences of `query` in `text`.
///
/// Ranges are `(start, end)` character indices with exclusive end.
///
/// Lowercases whole strings the way [`Event::matches`] does, so a card that
/// matches always gets a highlight. One character can lowercase to several
/// (`İ`), hence the map back to source indices.
fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    if needle.is_empty() {
        return vec![];
    }
    let hay: Vec<char> = text.to_lowercase().chars().collect();
    let origin: Vec<usize> = text
        .chars()
        .enumerate()
        .flat_map(|(idx, c)| std::iter::repeat(idx).take(c.to_lowercase().count()))
        .collect();
    if origin.len() != hay.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            ranges.push((origin[i], origin[i + needle.len() - 1] + 1));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}
