//! Application layer coordinating state, inputs, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain layer.
//! It owns the event collection and the form draft, resolves routes, and turns
//! keystrokes into state transitions.
//!
//! # Architecture
//!
//! Data flows in one direction:
//!
//! ```text
//! Key press → Input → handle_event → State Mutations → Actions → Side Effects
//!                                          ↓
//!                               compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the handler
//! - [`handler`]: Input processing and state transition coordinator
//! - [`modes`]: Input mode state machine
//! - [`routes`]: Navigable views and path resolution
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod routes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Input};
pub use modes::InputMode;
pub use routes::Route;
pub use state::{AppState, SubmitOutcome};
