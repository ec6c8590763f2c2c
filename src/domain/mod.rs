//! Domain layer for the EventDesk plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific APIs
//! or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`event`]: The event record, its identifier and priority
//! - [`draft`]: Form fields and the staged draft of a pending create or update

pub mod draft;
pub mod error;
pub mod event;

pub use draft::{Draft, Field, FieldKind};
pub use error::{EventDeskError, Result};
pub use event::{Event, EventId, Priority};
