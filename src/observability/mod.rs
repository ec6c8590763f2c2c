//! OpenTelemetry-based observability with file-based trace export.
//!
//! Spans recorded with `tracing` are bridged into OpenTelemetry and written as
//! OTLP JSON lines to a local file, since a plugin sandbox has no collector to
//! talk to.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → RotatingFile
//! ```
//!
//! - **Location**: `~/.local/share/zellij/eventdesk/eventdesk-otlp.json`
//! - **Rotation**: at 10 MiB, keeping three numbered backups
//! - **Level**: `trace_level` plugin option, default `info`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`exporter`]: Span exporter and OTLP JSON encoding
//! - [`rotation`]: Size-rotated trace file

mod exporter;
mod init;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
