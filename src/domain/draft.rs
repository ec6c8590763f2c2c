//! Form draft state.
//!
//! The draft stages the values of a pending create or update. It mirrors every
//! [`Event`] attribute as raw form text and remembers which event, if any, is being
//! edited. Each [`Field`] carries its form metadata (label, placeholder, input kind)
//! so that the form can be rendered and filtered without extra tables.

use chrono::NaiveTime;

use super::error::{EventDeskError, Result};
use super::event::{Event, EventId, Priority};

/// Template used to complete a partially typed time before validating it.
const TIME_TEMPLATE: &str = "00:00";

/// Input kind of a form field, the analogue of an HTML input type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text.
    Text,
    /// Free text that may span several lines.
    MultilineText,
    /// `HH:MM` time of day.
    TimeOfDay,
    /// Decimal number.
    Number,
    /// One value out of a fixed set, cycled rather than typed.
    Choice,
    /// Email-shaped text. The format is not checked.
    Email,
    /// Phone-shaped text. The format is not checked.
    Phone,
}

/// The form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Category,
    StartTime,
    EndTime,
    Duration,
    Priority,
    Email,
    Phone,
}

impl Field {
    /// Every field in form order.
    pub const ALL: [Self; 9] = [
        Self::Title,
        Self::Description,
        Self::Category,
        Self::StartTime,
        Self::EndTime,
        Self::Duration,
        Self::Priority,
        Self::Email,
        Self::Phone,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Description => "Description",
            Self::Category => "Category",
            Self::StartTime => "Start Time",
            Self::EndTime => "End Time",
            Self::Duration => "Duration (hours)",
            Self::Priority => "Priority",
            Self::Email => "Contact Email",
            Self::Phone => "Contact Phone",
        }
    }

    /// Hint shown while the field is empty.
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Event Title",
            Self::Description => "Event Description",
            Self::Category => "Category",
            Self::StartTime => "Start Time",
            Self::EndTime => "End Time",
            Self::Duration => "Duration (hours)",
            Self::Priority => "Low",
            Self::Email => "Contact Email",
            Self::Phone => "Contact Phone",
        }
    }

    #[must_use]
    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Title | Self::Category => FieldKind::Text,
            Self::Description => FieldKind::MultilineText,
            Self::StartTime | Self::EndTime => FieldKind::TimeOfDay,
            Self::Duration => FieldKind::Number,
            Self::Priority => FieldKind::Choice,
            Self::Email => FieldKind::Email,
            Self::Phone => FieldKind::Phone,
        }
    }

    /// Whether a submit requires this field to be non-empty.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Category | Self::Duration | Self::Priority)
    }

    /// Next field in focus order, wrapping to the first.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous field in focus order, wrapping to the last.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl FieldKind {
    /// Returns the new value if `c` may be appended to `current`, `None` otherwise.
    fn accept(self, current: &str, c: char) -> Option<String> {
        match self {
            Self::Text | Self::Email | Self::Phone => {
                (!c.is_control()).then(|| format!("{current}{c}"))
            }
            Self::MultilineText => {
                (!c.is_control() || c == '\n').then(|| format!("{current}{c}"))
            }
            Self::Number => {
                let ok = c.is_ascii_digit() || (c == '.' && !current.contains('.'));
                ok.then(|| format!("{current}{c}"))
            }
            Self::TimeOfDay => accept_time_char(current, c),
            Self::Choice => None,
        }
    }
}

/// Extends a partially typed `HH:MM` value, inserting the colon after the hour.
///
/// A keystroke is refused once the prefix can no longer complete to a valid time.
fn accept_time_char(current: &str, c: char) -> Option<String> {
    let candidate = match (current.len(), c) {
        (2, ':') => format!("{current}:"),
        (2, d) if d.is_ascii_digit() => format!("{current}:{d}"),
        (len, d) if len < TIME_TEMPLATE.len() && d.is_ascii_digit() => format!("{current}{d}"),
        _ => return None,
    };

    let completed = format!("{candidate}{}", &TIME_TEMPLATE[candidate.len()..]);
    NaiveTime::parse_from_str(&completed, "%H:%M")
        .is_ok()
        .then_some(candidate)
}

/// Staged form values plus the optional edit target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub priority: Priority,
    pub email: String,
    pub phone: String,
    /// Identifier of the event being edited, `None` when adding.
    pub editing: Option<EventId>,
}

impl Draft {
    /// Current value of a field as text.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Priority => self.priority.as_str(),
            _ => self.text(field).map_or("", String::as_str),
        }
    }

    fn text(&self, field: Field) -> Option<&String> {
        match field {
            Field::Title => Some(&self.title),
            Field::Description => Some(&self.description),
            Field::Category => Some(&self.category),
            Field::StartTime => Some(&self.start_time),
            Field::EndTime => Some(&self.end_time),
            Field::Duration => Some(&self.duration),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Priority => None,
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Title => Some(&mut self.title),
            Field::Description => Some(&mut self.description),
            Field::Category => Some(&mut self.category),
            Field::StartTime => Some(&mut self.start_time),
            Field::EndTime => Some(&mut self.end_time),
            Field::Duration => Some(&mut self.duration),
            Field::Email => Some(&mut self.email),
            Field::Phone => Some(&mut self.phone),
            Field::Priority => None,
        }
    }

    /// Appends a character if the field's input kind accepts it.
    ///
    /// Returns `true` when the draft changed.
    pub fn push_char(&mut self, field: Field, c: char) -> bool {
        let kind = field.kind();
        let Some(value) = self.text_mut(field) else {
            return false;
        };
        match kind.accept(value, c) {
            Some(updated) => {
                *value = updated;
                true
            }
            None => false,
        }
    }

    /// Removes the last character of a field.
    ///
    /// A trailing time separator is removed together with the hour digit before it
    /// so that backspacing `09:3` yields `09`.
    pub fn pop_char(&mut self, field: Field) -> bool {
        let kind = field.kind();
        let Some(value) = self.text_mut(field) else {
            return false;
        };
        if value.pop().is_none() {
            return false;
        }
        if kind == FieldKind::TimeOfDay && value.ends_with(':') {
            value.pop();
        }
        true
    }

    /// Cycles the priority choice.
    pub fn cycle_priority(&mut self, forward: bool) {
        self.priority = if forward {
            self.priority.next()
        } else {
            self.priority.previous()
        };
    }

    /// Resets every field to its default and clears the edit target.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Copies every value of `event` into the draft and targets it for editing.
    pub fn load(&mut self, event: &Event) {
        *self = Self {
            title: event.title.clone(),
            description: event.description.clone(),
            category: event.category.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            duration: event.duration.clone(),
            priority: event.priority,
            email: event.email.clone(),
            phone: event.phone.clone(),
            editing: Some(event.id),
        };
    }

    /// Required fields that are still empty, in form order.
    #[must_use]
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.value(*f).is_empty())
            .collect()
    }

    /// Builds an event carrying the draft values under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`EventDeskError::MissingFields`] if any required field is empty.
    pub fn to_event(&self, id: EventId) -> Result<Event> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(EventDeskError::MissingFields(missing));
        }

        Ok(Event {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
            duration: self.duration.clone(),
            priority: self.priority,
            email: self.email.clone(),
            phone: self.phone.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(draft: &mut Draft, field: Field, text: &str) {
        for c in text.chars() {
            draft.push_char(field, c);
        }
    }

    fn filled() -> Draft {
        let mut draft = Draft::default();
        type_into(&mut draft, Field::Title, "Team Sync");
        type_into(&mut draft, Field::Description, "Weekly standup");
        type_into(&mut draft, Field::StartTime, "0900");
        type_into(&mut draft, Field::EndTime, "0930");
        type_into(&mut draft, Field::Email, "a@b.com");
        type_into(&mut draft, Field::Phone, "555-1234");
        draft
    }

    #[test]
    fn required_fields_match_the_form_contract() {
        let required: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_required()).collect();
        assert_eq!(
            required,
            vec![
                Field::Title,
                Field::Description,
                Field::StartTime,
                Field::EndTime,
                Field::Email,
                Field::Phone
            ]
        );
    }

    #[test]
    fn focus_order_wraps() {
        assert_eq!(Field::Phone.next(), Field::Title);
        assert_eq!(Field::Title.previous(), Field::Phone);
        assert_eq!(Field::Duration.next(), Field::Priority);
    }

    #[test]
    fn time_input_inserts_colon_and_rejects_impossible_times() {
        let mut draft = Draft::default();
        type_into(&mut draft, Field::StartTime, "0930");
        assert_eq!(draft.start_time, "09:30");

        let mut draft = Draft::default();
        assert!(!draft.push_char(Field::StartTime, '3'));
        type_into(&mut draft, Field::StartTime, "2");
        assert!(!draft.push_char(Field::StartTime, '4'));
        type_into(&mut draft, Field::StartTime, "3");
        assert!(!draft.push_char(Field::StartTime, '6'));
        type_into(&mut draft, Field::StartTime, "59");
        assert_eq!(draft.start_time, "23:59");
        assert!(!draft.push_char(Field::StartTime, '1'));
        assert!(!draft.push_char(Field::StartTime, 'x'));
    }

    #[test]
    fn time_input_accepts_explicit_colon() {
        let mut draft = Draft::default();
        type_into(&mut draft, Field::EndTime, "12:05");
        assert_eq!(draft.end_time, "12:05");
    }

    #[test]
    fn backspace_drops_dangling_time_separator() {
        let mut draft = Draft::default();
        type_into(&mut draft, Field::StartTime, "093");
        assert_eq!(draft.start_time, "09:3");
        draft.pop_char(Field::StartTime);
        assert_eq!(draft.start_time, "09");
        draft.pop_char(Field::StartTime);
        assert_eq!(draft.start_time, "0");
        assert!(draft.pop_char(Field::StartTime));
        assert!(!draft.pop_char(Field::StartTime));
    }

    #[test]
    fn number_input_allows_one_decimal_point() {
        let mut draft = Draft::default();
        type_into(&mut draft, Field::Duration, "1.5.2a");
        assert_eq!(draft.duration, "1.52");
    }

    #[test]
    fn only_description_accepts_newlines() {
        let mut draft = Draft::default();
        assert!(!draft.push_char(Field::Title, '\n'));
        assert!(draft.push_char(Field::Description, '\n'));
        assert_eq!(draft.description, "\n");
    }

    #[test]
    fn priority_is_cycled_not_typed() {
        let mut draft = Draft::default();
        assert!(!draft.push_char(Field::Priority, 'H'));
        assert!(!draft.pop_char(Field::Priority));
        draft.cycle_priority(true);
        assert_eq!(draft.value(Field::Priority), "Medium");
        draft.cycle_priority(false);
        draft.cycle_priority(false);
        assert_eq!(draft.priority, Priority::High);
    }

    #[test]
    fn to_event_reports_every_missing_field() {
        let mut draft = filled();
        draft.email.clear();
        draft.title.clear();
        match draft.to_event(EventId::new()) {
            Err(EventDeskError::MissingFields(fields)) => {
                assert_eq!(fields, vec![Field::Title, Field::Email]);
            }
            other => panic!("expected missing fields, got {other:?}"),
        }
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let draft = filled();
        let event = draft.to_event(EventId::new()).unwrap();
        assert_eq!(event.category, "");
        assert_eq!(event.duration, "");
        assert_eq!(event.priority, Priority::Low);
        assert_eq!(event.start_time, "09:00");
    }

    #[test]
    fn load_then_to_event_round_trips() {
        let original = filled().to_event(EventId::new()).unwrap();
        let mut draft = Draft::default();
        draft.title.push_str("leftover");
        draft.load(&original);
        assert_eq!(draft.editing, Some(original.id));
        assert_eq!(draft.to_event(original.id).unwrap(), original);
    }

    #[test]
    fn clear_restores_defaults() {
        let mut draft = filled();
        draft.cycle_priority(true);
        draft.editing = Some(EventId::new());
        draft.clear();
        assert_eq!(draft, Draft::default());
    }
}
