//! Input handling and state transition logic.
//!
//! The handler turns one discrete user input into state changes plus a list of
//! actions for the plugin shim. Each call runs to completion before the next input
//! is dispatched; there is no deferred work.
//!
//! # Input Categories
//!
//! - **Navigation**: `Navigate`, `NextLink`
//! - **List**: `SelectNext`, `SelectPrevious`, `EditSelected`, `DeleteSelected`
//! - **Focus**: `FocusForm`, `FocusSearch`, `NextField`, `PreviousField`, `Blur`
//! - **Text**: `Char`, `Backspace`, `Enter`, `CyclePriority`
//! - **Commands**: `Submit`, `CancelEdit`, `ClearSearch`, `CloseFocus`
//!
//! List, focus and command inputs only apply on the management view; elsewhere
//! they are ignored without a re-render.

use super::modes::InputMode;
use super::routes::Route;
use super::state::SubmitOutcome;
use crate::app::{Action, AppState};
use crate::domain::{EventDeskError, Field, Result};

/// Discrete user inputs, already decoded from key presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Follows a navigation link to `path`.
    Navigate(String),
    /// Follows the navigation link after the current one.
    NextLink,
    /// Moves the list selection down (wraps to top).
    SelectNext,
    /// Moves the list selection up (wraps to bottom).
    SelectPrevious,
    /// Loads the selected event into the form for editing.
    EditSelected,
    /// Deletes the selected event. No confirmation.
    DeleteSelected,
    /// Starts typing into the form at its first field.
    FocusForm,
    /// Starts typing into the search box.
    FocusSearch,
    /// Moves form focus to the next field.
    NextField,
    /// Moves form focus to the previous field.
    PreviousField,
    /// Types a character into the focused input.
    Char(char),
    /// Deletes the last character of the focused input.
    Backspace,
    /// Newline in the description, next field elsewhere in the form, leaves search.
    Enter,
    /// Changes the priority choice.
    CyclePriority {
        /// `true` for the next value, `false` for the previous one.
        forward: bool,
    },
    /// Commits the form (add or update).
    Submit,
    /// Drops the draft and the edit target.
    CancelEdit,
    /// Empties the search query.
    ClearSearch,
    /// Leaves the form or search box.
    Blur,
    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an input, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the input changed
/// nothing visible, including a submit refused for missing fields.
///
/// # Errors
///
/// Returns errors from state transitions that are not part of normal interaction.
/// Missing required fields are not an error at this level.
pub fn handle_event(state: &mut AppState, input: &Input) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", input = ?input, mode = ?state.input_mode).entered();

    match input {
        Input::Navigate(path) => Ok(navigate(state, path)),
        Input::NextLink => {
            let target = Route::next_link(state.route());
            Ok(navigate(state, target.path()))
        }
        Input::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        _ if state.route() != Some(Route::Events) => {
            tracing::trace!("input ignored outside the management view");
            Ok((false, vec![]))
        }
        Input::SelectNext => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Input::SelectPrevious => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Input::EditSelected => {
            let Some(id) = state.selected_event().map(|e| e.id) else {
                tracing::debug!("no event selected to edit");
                return Ok((false, vec![]));
            };
            state.begin_edit(id)?;
            state.input_mode = InputMode::Form(Field::Title);
            Ok((true, vec![]))
        }
        Input::DeleteSelected => {
            let Some(id) = state.selected_event().map(|e| e.id) else {
                tracing::debug!("no event selected to delete");
                return Ok((false, vec![]));
            };
            Ok((state.delete(id), vec![]))
        }
        Input::FocusForm => {
            state.input_mode = InputMode::Form(Field::Title);
            Ok((true, vec![]))
        }
        Input::FocusSearch => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Input::NextField | Input::PreviousField => {
            let InputMode::Form(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            let next = if *input == Input::NextField {
                field.next()
            } else {
                field.previous()
            };
            state.input_mode = InputMode::Form(next);
            Ok((true, vec![]))
        }
        Input::Char(c) => Ok((type_char(state, *c), vec![])),
        Input::Backspace => {
            let changed = match state.input_mode {
                InputMode::Form(field) => state.draft.pop_char(field),
                InputMode::Search => {
                    let mut query = state.search_query.clone();
                    let popped = query.pop().is_some();
                    state.set_search_query(&query);
                    popped
                }
                InputMode::Normal => false,
            };
            Ok((changed, vec![]))
        }
        Input::Enter => match state.input_mode {
            InputMode::Form(Field::Description) => {
                Ok((state.draft.push_char(Field::Description, '\n'), vec![]))
            }
            InputMode::Form(field) => {
                state.input_mode = InputMode::Form(field.next());
                Ok((true, vec![]))
            }
            InputMode::Search => {
                state.input_mode = InputMode::Normal;
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Input::CyclePriority { forward } => {
            if state.input_mode != InputMode::Form(Field::Priority) {
                return Ok((false, vec![]));
            }
            state.draft.cycle_priority(*forward);
            Ok((true, vec![]))
        }
        Input::Submit => submit(state),
        Input::CancelEdit => {
            if state.draft == crate::domain::Draft::default() {
                return Ok((false, vec![]));
            }
            state.cancel_edit();
            Ok((true, vec![]))
        }
        Input::ClearSearch => {
            if state.search_query.is_empty() {
                return Ok((false, vec![]));
            }
            state.set_search_query("");
            Ok((true, vec![]))
        }
        Input::Blur => {
            let was_typing = state.input_mode != InputMode::Normal;
            state.input_mode = InputMode::Normal;
            Ok((was_typing, vec![]))
        }
    }
}

fn navigate(state: &mut AppState, path: &str) -> (bool, Vec<Action>) {
    if state.current_path == path {
        return (false, vec![]);
    }

    let route = state.navigate(path);
    if route.is_none() {
        tracing::debug!(error = %EventDeskError::UnknownRoute(path.to_string()), "navigated to unmatched path");
    } else {
        tracing::debug!(path = %path, route = ?route, "navigated");
    }

    (true, vec![Action::RenamePane { title: Route::pane_title(route) }])
}

fn type_char(state: &mut AppState, c: char) -> bool {
    match state.input_mode {
        InputMode::Form(Field::Priority) if c == ' ' => {
            state.draft.cycle_priority(true);
            true
        }
        InputMode::Form(field) => state.draft.push_char(field, c),
        InputMode::Search => {
            let query = format!("{}{c}", state.search_query);
            state.set_search_query(&query);
            tracing::trace!(query = %state.search_query, "search query updated");
            true
        }
        InputMode::Normal => false,
    }
}

fn submit(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match state.submit() {
        Ok(outcome) => {
            state.input_mode = InputMode::Normal;
            if let SubmitOutcome::Added(id) | SubmitOutcome::Updated(id) = outcome {
                state.select(id);
            }
            Ok((true, vec![]))
        }
        Err(EventDeskError::MissingFields(fields)) => {
            tracing::debug!(missing = ?fields, "submit ignored, required fields empty");
            Ok((false, vec![]))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use crate::ui::Theme;

    fn state_at(path: &str) -> AppState {
        AppState::new(Theme::default(), path)
    }

    fn send(state: &mut AppState, input: Input) -> (bool, Vec<Action>) {
        handle_event(state, &input).unwrap()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            send(state, Input::Char(c));
        }
    }

    /// Fills the form the way a user would, field by field.
    fn fill_form(state: &mut AppState, title: &str, description: &str) {
        send(state, Input::FocusForm);
        type_text(state, title);
        send(state, Input::NextField);
        type_text(state, description);
        send(state, Input::NextField);
        send(state, Input::NextField);
        type_text(state, "0900");
        send(state, Input::Enter);
        type_text(state, "0930");
        send(state, Input::NextField);
        send(state, Input::NextField);
        send(state, Input::NextField);
        type_text(state, "a@b.com");
        send(state, Input::NextField);
        type_text(state, "555-1234");
    }

    #[test]
    fn example_scenario_end_to_end() {
        let mut s = state_at("/events");
        fill_form(&mut s, "Team Sync", "Weekly standup");
        let (render, actions) = send(&mut s, Input::Submit);
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(s.events.len(), 1);
        assert_eq!(s.events[0].start_time, "09:00");
        assert_eq!(s.events[0].end_time, "09:30");
        assert_eq!(s.events[0].priority, Priority::Low);
        assert_eq!(s.input_mode, InputMode::Normal);

        send(&mut s, Input::FocusSearch);
        type_text(&mut s, "standup");
        assert_eq!(s.filtered_events().len(), 1);

        send(&mut s, Input::ClearSearch);
        type_text(&mut s, "lunch");
        assert!(s.filtered_events().is_empty());
    }

    #[test]
    fn incomplete_submit_is_silent() {
        let mut s = state_at("/events");
        send(&mut s, Input::FocusForm);
        type_text(&mut s, "Only a title");
        let draft = s.draft.clone();

        let (render, actions) = send(&mut s, Input::Submit);
        assert!(!render);
        assert!(actions.is_empty());
        assert!(s.events.is_empty());
        assert_eq!(s.draft, draft);
        assert_eq!(s.input_mode, InputMode::Form(Field::Title));
    }

    #[test]
    fn edit_then_update_selected_event() {
        let mut s = state_at("/events");
        fill_form(&mut s, "A", "first");
        send(&mut s, Input::Submit);
        fill_form(&mut s, "B", "second");
        send(&mut s, Input::Submit);
        assert_eq!(s.selected_event().unwrap().title, "B");

        send(&mut s, Input::SelectPrevious);
        send(&mut s, Input::EditSelected);
        assert_eq!(s.input_mode, InputMode::Form(Field::Title));
        assert_eq!(s.draft.title, "A");

        send(&mut s, Input::Backspace);
        type_text(&mut s, "Alpha");
        for _ in 0..6 {
            send(&mut s, Input::NextField);
        }
        send(&mut s, Input::CyclePriority { forward: false });
        send(&mut s, Input::Submit);

        assert_eq!(s.events.len(), 2);
        assert_eq!(s.events[0].title, "Alpha");
        assert_eq!(s.events[0].priority, Priority::High);
        assert_eq!(s.events[1].title, "B");
        assert!(s.draft.editing.is_none());
    }

    #[test]
    fn selection_survives_update_that_leaves_search() {
        let mut s = state_at("/events");
        fill_form(&mut s, "A", "x one");
        send(&mut s, Input::Submit);
        fill_form(&mut s, "B", "x two");
        send(&mut s, Input::Submit);

        send(&mut s, Input::FocusSearch);
        type_text(&mut s, "x");
        send(&mut s, Input::Blur);
        assert_eq!(s.selected_event().unwrap().title, "B");

        send(&mut s, Input::EditSelected);
        send(&mut s, Input::NextField);
        for _ in 0.."x two".len() {
            send(&mut s, Input::Backspace);
        }
        type_text(&mut s, "nomatch");
        send(&mut s, Input::Submit);

        assert_eq!(s.filtered_events().len(), 1);
        assert_eq!(s.selected_event().unwrap().title, "A");
        let (render, _) = send(&mut s, Input::DeleteSelected);
        assert!(render);
        assert_eq!(s.events.len(), 1);
        assert_eq!(s.events[0].title, "B");
    }

    #[test]
    fn delete_selected_and_empty_list() {
        let mut s = state_at("/events");
        assert_eq!(send(&mut s, Input::DeleteSelected), (false, vec![]));

        fill_form(&mut s, "A", "first");
        send(&mut s, Input::Submit);
        let (render, _) = send(&mut s, Input::DeleteSelected);
        assert!(render);
        assert!(s.events.is_empty());
    }

    #[test]
    fn enter_adds_newline_only_in_description() {
        let mut s = state_at("/events");
        send(&mut s, Input::FocusForm);
        send(&mut s, Input::Enter);
        assert_eq!(s.input_mode, InputMode::Form(Field::Description));
        type_text(&mut s, "line one");
        send(&mut s, Input::Enter);
        type_text(&mut s, "line two");
        assert_eq!(s.draft.description, "line one\nline two");
        assert!(s.draft.title.is_empty());
    }

    #[test]
    fn space_cycles_priority_field() {
        let mut s = state_at("/events");
        s.input_mode = InputMode::Form(Field::Priority);
        send(&mut s, Input::Char(' '));
        assert_eq!(s.draft.priority, Priority::Medium);
        send(&mut s, Input::Char('x'));
        assert_eq!(s.draft.priority, Priority::Medium);
    }

    #[test]
    fn cycle_priority_needs_priority_focus() {
        let mut s = state_at("/events");
        s.input_mode = InputMode::Form(Field::Title);
        assert_eq!(send(&mut s, Input::CyclePriority { forward: true }), (false, vec![]));
        assert_eq!(s.draft.priority, Priority::Low);
    }

    #[test]
    fn cancel_edit_clears_draft_but_keeps_events() {
        let mut s = state_at("/events");
        fill_form(&mut s, "A", "first");
        send(&mut s, Input::Submit);
        send(&mut s, Input::EditSelected);
        send(&mut s, Input::Blur);

        let (render, _) = send(&mut s, Input::CancelEdit);
        assert!(render);
        assert!(s.draft.editing.is_none());
        assert_eq!(s.events.len(), 1);
        assert_eq!(send(&mut s, Input::CancelEdit), (false, vec![]));
    }

    #[test]
    fn search_typing_and_backspace() {
        let mut s = state_at("/events");
        send(&mut s, Input::FocusSearch);
        type_text(&mut s, "abc");
        send(&mut s, Input::Backspace);
        assert_eq!(s.search_query, "ab");
        send(&mut s, Input::Enter);
        assert_eq!(s.input_mode, InputMode::Normal);
        assert_eq!(send(&mut s, Input::Char('z')), (false, vec![]));
        assert_eq!(s.search_query, "ab");
    }

    #[test]
    fn navigation_renames_pane_once() {
        let mut s = state_at("/");
        let (render, actions) = send(&mut s, Input::Navigate("/events".to_string()));
        assert!(render);
        assert_eq!(
            actions,
            vec![Action::RenamePane {
                title: "Event Management - Manage Events".to_string()
            }]
        );
        assert_eq!(send(&mut s, Input::Navigate("/events".to_string())), (false, vec![]));

        send(&mut s, Input::NextLink);
        assert_eq!(s.route(), Some(Route::Home));
    }

    #[test]
    fn management_inputs_ignored_elsewhere() {
        let mut s = state_at("/");
        for input in [Input::FocusForm, Input::SelectNext, Input::Submit, Input::Char('a')] {
            assert_eq!(send(&mut s, input), (false, vec![]));
        }
        assert_eq!(s.input_mode, InputMode::Normal);

        s.navigate("/unknown");
        assert_eq!(send(&mut s, Input::FocusSearch), (false, vec![]));
    }

    #[test]
    fn close_focus_works_anywhere() {
        let mut s = state_at("/nowhere");
        assert_eq!(send(&mut s, Input::CloseFocus), (false, vec![Action::CloseFocus]));
    }
}
