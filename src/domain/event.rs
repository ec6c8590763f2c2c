//! Event domain model.
//!
//! An [`Event`] is the only record the plugin manages. Events live in plugin memory
//! for the lifetime of the pane and are identified by a random [`EventId`].

use std::fmt;
use uuid::Uuid;

/// Unique event identifier.
///
/// Backed by a random v4 UUID so that two events created in quick succession can
/// never share an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(Uuid);

impl EventId {
    /// Generates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// First eight hex digits, used in logs and the event card.
    #[must_use]
    pub fn short(&self) -> String {
        let mut buf = Uuid::encode_buffer();
        self.0.simple().encode_lower(&mut buf).chars().take(8).collect()
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Event priority, a single-choice value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    /// All priorities in display order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Next priority, wrapping from `High` to `Low`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    /// Previous priority, wrapping from `Low` to `High`.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar-like event.
///
/// Time values are `HH:MM` strings exactly as typed in the form. `duration` is free
/// numeric text and is not reconciled with the time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub priority: Priority,
    pub email: String,
    pub phone: String,
}

impl Event {
    /// Case-insensitive substring match against title or description.
    ///
    /// An empty query matches every event.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }

    /// `start - end` as shown on the event card.
    #[must_use]
    pub fn time_slot(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Event {
        Event {
            id: EventId::new(),
            title: "Team Sync".to_string(),
            description: "Weekly standup".to_string(),
            category: String::new(),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            duration: String::new(),
            priority: Priority::Low,
            email: "a@b.com".to_string(),
            phone: "555-1234".to_string(),
        }
    }

    #[test]
    fn ids_are_unique() {
        let ids: std::collections::HashSet<EventId> = (0..1000).map(|_| EventId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn short_id_is_eight_hex_chars() {
        let short = EventId::new().short();
        assert_eq!(short.len(), 8);
        assert!(short.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn short_id_is_prefix_of_full_id() {
        let id = EventId::new();
        assert!(id.to_string().replace('-', "").starts_with(&id.short()));
    }

    #[test]
    fn priority_cycles_both_ways() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.previous(), Priority::High);
        for p in Priority::ALL {
            assert_eq!(p.next().previous(), p);
        }
    }

    #[test]
    fn priority_labels_and_default() {
        let labels: Vec<String> = Priority::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Low", "Medium", "High"]);
        assert_eq!(Priority::default(), Priority::Low);
    }

    #[test]
    fn matches_title_or_description_ignoring_case() {
        let event = sample();
        assert!(event.matches(""));
        assert!(event.matches("standup"));
        assert!(event.matches("TEAM"));
        assert!(event.matches("sync"));
        assert!(!event.matches("lunch"));
        assert!(!event.matches("a@b.com"));
    }

    #[test]
    fn time_slot_joins_start_and_end() {
        assert_eq!(sample().time_slot(), "09:00 - 09:30");
    }
}
