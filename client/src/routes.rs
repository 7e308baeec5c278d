//! Declarative route table for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` mounts screens from the segment constants below and the dashboard
//! sidebar renders its navigation from `ROUTE_TABLE`. Each table entry keeps
//! its full path next to the segments it is mounted from, and tests hold the
//! two in agreement. Matching itself is left to `leptos_router`.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const DASHBOARD_SEGMENT: &str = "dashboard";
pub const AUTH_SEGMENT: &str = "auth";
pub const HOME_SEGMENT: &str = "home";
pub const BOOKS_SEGMENT: &str = "books";
pub const CREATE_SEGMENT: &str = "create";
pub const LOGIN_SEGMENT: &str = "login";
pub const REGISTER_SEGMENT: &str = "register";

pub const ROOT_PATH: &str = "/";
pub const HOME_PATH: &str = "/dashboard/home";
pub const BOOKS_PATH: &str = "/dashboard/books";
pub const CREATE_BOOK_PATH: &str = "/dashboard/books/create";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// Layout shell a screen is mounted under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shell {
    /// Authenticated chrome with sidebar navigation.
    Dashboard,
    /// Centered card layout for unauthenticated screens.
    Auth,
}

/// One entry of the static route tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub shell: Shell,
    /// Segments below the shell's own segment, as mounted by `app`.
    pub segments: &'static [&'static str],
    /// Sidebar label; `None` keeps the screen out of navigation.
    pub nav_label: Option<&'static str>,
}

/// Every screen the app serves. `/` is not listed; it always redirects to
/// [`HOME_PATH`].
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { path: HOME_PATH, shell: Shell::Dashboard, segments: &[HOME_SEGMENT], nav_label: Some("Home") },
    RouteEntry { path: BOOKS_PATH, shell: Shell::Dashboard, segments: &[BOOKS_SEGMENT], nav_label: Some("Books") },
    RouteEntry { path: CREATE_BOOK_PATH, shell: Shell::Dashboard, segments: &[BOOKS_SEGMENT, CREATE_SEGMENT], nav_label: None },
    RouteEntry { path: LOGIN_PATH, shell: Shell::Auth, segments: &[LOGIN_SEGMENT], nav_label: None },
    RouteEntry { path: REGISTER_PATH, shell: Shell::Auth, segments: &[REGISTER_SEGMENT], nav_label: None },
];

impl Shell {
    /// Path segment the shell's parent route is mounted at.
    pub fn segment(self) -> &'static str {
        match self {
            Self::Dashboard => DASHBOARD_SEGMENT,
            Self::Auth => AUTH_SEGMENT,
        }
    }
}

/// Sidebar entries for a shell, in table order.
pub fn nav_entries(shell: Shell) -> impl Iterator<Item = (&'static str, &'static str)> {
    ROUTE_TABLE
        .iter()
        .filter(move |entry| entry.shell == shell)
        .filter_map(|entry| entry.nav_label.map(|label| (entry.path, label)))
}
