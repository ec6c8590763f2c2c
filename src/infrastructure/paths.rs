//! Path utilities for the Zellij sandbox environment.
//!
//! In the plugin sandbox the host filesystem is reachable under `/host`, which
//! points at the directory Zellij was started from (usually the home directory).

use std::path::PathBuf;

/// Returns the data directory, `/host/.local/share/zellij/eventdesk`.
///
/// Only trace files are written here; events themselves are never persisted.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("eventdesk")
}

/// Expands a leading `~` to the sandbox's `/host` mount.
///
/// `~user` forms and tildes elsewhere in the path are left alone.
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix('~') {
        Some("") => PathBuf::from("/host"),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("/host{rest}")),
        _ => PathBuf::from(path),
    }
}
