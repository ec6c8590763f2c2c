//! Error types for the EventDesk plugin.
//!
//! This module defines the centralized error type [`EventDeskError`] and a type alias
//! [`Result`] used throughout the plugin. All errors are implemented using the
//! `thiserror` crate.

use thiserror::Error;

use super::draft::Field;
use super::event::EventId;

/// The main error type for EventDesk operations.
///
/// Most variants never reach the user. Form validation failures in particular are
/// absorbed by the event handler: the submit simply does not happen.
#[derive(Debug, Error)]
pub enum EventDeskError {
    /// A draft was committed while one or more required fields were empty.
    ///
    /// Carries the empty fields in form order.
    #[error("Missing required fields: {}", format_fields(.0))]
    MissingFields(Vec<Field>),

    /// No event carries the given identifier.
    #[error("No event with id {0}")]
    UnknownEvent(EventId),

    /// A navigation target did not match any known route.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

fn format_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A specialized `Result` type for EventDesk operations.
pub type Result<T> = std::result::Result<T, EventDeskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_labels_in_order() {
        let err = EventDeskError::MissingFields(vec![Field::Title, Field::Email]);
        assert_eq!(err.to_string(), "Missing required fields: Title, Contact Email");
    }
}
