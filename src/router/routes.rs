//! Declarative route table.
//!
//! DESIGN
//! ======
//! The table is an ordered `const` slice; resolution returns the first entry
//! whose path matches. Views are referenced by `ViewId` and built by
//! `pages::render`, so this module knows nothing about components.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Stable route identifiers used by the guard and for redirects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Register,
    Stocks,
    Backtest,
    Backtest2000,
}

impl RouteName {
    /// The table entry registered under this name.
    pub fn entry(self) -> Option<&'static RouteEntry> {
        ROUTES.iter().find(|entry| entry.name == self)
    }

    /// Path of this route, used as a redirect target.
    pub fn path(self) -> &'static str {
        self.entry().map_or("/", |entry| entry.path)
    }
}

/// Views the page layer knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewId {
    Home,
    Login,
    Register,
    Stocks,
    Backtest,
    Backtest2000,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: RouteName,
    pub view: ViewId,
    /// Label shown in the navigation bar.
    pub title: &'static str,
    pub requires_auth: bool,
}

impl RouteEntry {
    /// A route anyone may visit.
    pub const fn public(path: &'static str, name: RouteName, view: ViewId, title: &'static str) -> Self {
        Self { path, name, view, title, requires_auth: false }
    }

    /// A route that requires an authenticated session.
    pub const fn protected(path: &'static str, name: RouteName, view: ViewId, title: &'static str) -> Self {
        Self { path, name, view, title, requires_auth: true }
    }
}

pub const ROUTES: &[RouteEntry] = &[
    RouteEntry::public("/", RouteName::Home, ViewId::Home, "Home"),
    RouteEntry::public("/login", RouteName::Login, ViewId::Login, "Login"),
    RouteEntry::public("/register", RouteName::Register, ViewId::Register, "Register"),
    RouteEntry::protected("/stocks", RouteName::Stocks, ViewId::Stocks, "Stocks"),
    RouteEntry::protected("/backtest", RouteName::Backtest, ViewId::Backtest, "Backtest"),
    RouteEntry::protected("/backtest2000", RouteName::Backtest2000, ViewId::Backtest2000, "Backtest 2000"),
];

/// Resolve a browser path against `ROUTES`. Returns `None` for unknown paths.
pub fn resolve(path: &str) -> Option<&'static RouteEntry> {
    let path = normalize_path(path);
    ROUTES.iter().find(|entry| entry.path == path)
}

/// Drop query and fragment, and a trailing slash except on `/`.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
