//! Navigable views and the navigation bar.
//!
//! The plugin has two routes, addressed by path like pages of a web application:
//! the welcome view at `/` and the management view at `/events`. Paths that match
//! neither resolve to `None`; the shell then renders only the navigation bar.

/// Brand text shown at the left of the navigation bar. Links to `/`.
pub const BRAND: &str = "Event Management";

/// A navigable view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Static welcome view.
    Home,
    /// Event management view.
    Events,
}

impl Route {
    /// Routes in navigation bar order.
    pub const ALL: [Self; 2] = [Self::Home, Self::Events];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Events => "/events",
        }
    }

    /// Navigation bar link label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Events => "Manage Events",
        }
    }

    /// Key that jumps to this route from the navigation bar.
    #[must_use]
    pub const fn hotkey(self) -> char {
        match self {
            Self::Home => '1',
            Self::Events => '2',
        }
    }

    /// Pane title while this route is shown.
    #[must_use]
    pub fn pane_title(route: Option<Self>) -> String {
        match route {
            Some(r) => format!("{BRAND} - {}", r.label()),
            None => BRAND.to_string(),
        }
    }

    /// Resolves a path to a route.
    ///
    /// A single trailing slash is ignored (`/events/` is `/events`). Anything else
    /// must match exactly.
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
            _ => path,
        };
        Self::ALL.into_iter().find(|r| r.path() == trimmed)
    }

    /// Route of the next navigation link, wrapping around. Unmatched paths go home.
    #[must_use]
    pub fn next_link(route: Option<Self>) -> Self {
        match route {
            Some(Self::Home) => Self::Events,
            Some(Self::Events) | None => Self::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_both_paths() {
        assert_eq!(Route::resolve("/"), Some(Route::Home));
        assert_eq!(Route::resolve("/events"), Some(Route::Events));
        assert_eq!(Route::resolve("/events/"), Some(Route::Events));
    }

    #[test]
    fn unmatched_paths_resolve_to_nothing() {
        assert_eq!(Route::resolve(""), None);
        assert_eq!(Route::resolve("/event"), None);
        assert_eq!(Route::resolve("/events/42"), None);
        assert_eq!(Route::resolve("//"), None);
    }

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::resolve(route.path()), Some(route));
        }
    }

    #[test]
    fn navigation_labels() {
        assert_eq!(Route::Home.label(), "Home");
        assert_eq!(Route::Events.label(), "Manage Events");
        assert_eq!(Route::pane_title(Some(Route::Events)), "Event Management - Manage Events");
        assert_eq!(Route::pane_title(None), "Event Management");
    }

    #[test]
    fn next_link_cycles() {
        assert_eq!(Route::next_link(Some(Route::Home)), Route::Events);
        assert_eq!(Route::next_link(Some(Route::Events)), Route::Home);
        assert_eq!(Route::next_link(None), Route::Home);
    }
}
