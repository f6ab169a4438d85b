//! Pre-navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per navigation attempt with a snapshot of the auth flag taken
//! before deciding. The decision is pure: same target and flag, same answer.
//! The originally requested path is not remembered across a login redirect.
//!
//! This is a UX guard only; the API still has to validate the session.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::routes::{RouteEntry, RouteName};

/// Outcome of a navigation check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    RedirectToLogin,
    /// Already signed in and heading to the login page.
    RedirectToDefault,
}

/// Guard configuration: where unauthenticated and already-authenticated
/// visitors are sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteGuard {
    pub login: RouteName,
    pub default_route: RouteName,
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self { login: RouteName::Login, default_route: RouteName::Stocks }
    }
}

impl RouteGuard {
    /// Decide whether navigation to `to` may proceed.
    pub fn decide(&self, to: &RouteEntry, authenticated: bool) -> NavigationDecision {
        if to.requires_auth && !authenticated {
            NavigationDecision::RedirectToLogin
        } else if to.name == self.login && authenticated {
            NavigationDecision::RedirectToDefault
        } else {
            NavigationDecision::Allow
        }
    }

    /// `decide`, plus a debug line naming where the navigation came from.
    pub fn before_each(&self, to: &RouteEntry, from: Option<&RouteEntry>, authenticated: bool) -> NavigationDecision {
        let decision = self.decide(to, authenticated);
        log::debug!(
            "navigate {} -> {} (authenticated={authenticated}): {decision:?}",
            from.map_or("<start>", |entry| entry.path),
            to.path,
        );
        decision
    }

    /// Route to navigate to for a redirect decision; `None` for `Allow`.
    pub fn redirect_target(&self, decision: NavigationDecision) -> Option<RouteName> {
        match decision {
            NavigationDecision::Allow => None,
            NavigationDecision::RedirectToLogin => Some(self.login),
            NavigationDecision::RedirectToDefault => Some(self.default_route),
        }
    }
}
