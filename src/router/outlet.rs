//! Route outlet: renders the view for the current location, or a redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! Matching is done against our own `ROUTES` table rather than
//! `leptos_router`'s `<Routes>`, so table order and the guard stay the single
//! source of truth.
//!
//! The guard result is held in a `Memo`. An auth flag change that leaves the
//! decision unchanged (e.g. logging out on `/`) does not re-mount the page; one
//! that flips it (logging out on `/stocks`, signing in on `/login`) redirects.

#[cfg(test)]
#[path = "outlet_test.rs"]
mod outlet_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::guard::{NavigationDecision, RouteGuard};
use super::routes::{RouteEntry, RouteName, resolve};
use crate::pages::{self, not_found::NotFoundPage};
use crate::state::session::AuthContext;

type RouteDecision = Option<(&'static RouteEntry, NavigationDecision)>;

/// Memoized guard result for the current path; `None` for unknown paths.
///
/// `previous` is the last rendered route. Re-checks of that same route (auth
/// flag changes) are decided silently; real navigations go through
/// `before_each` and get logged.
fn route_decision(
    path: impl Fn() -> String + Send + Sync + 'static,
    authenticated: impl Fn() -> bool + Send + Sync + 'static,
    guard: RouteGuard,
    previous: StoredValue<Option<RouteName>>,
) -> Memo<RouteDecision> {
    Memo::new(move |_| {
        let entry = resolve(&path())?;
        let authenticated = authenticated();
        let from = previous.get_value().and_then(RouteName::entry);
        let decision = match from {
            Some(from) if from.name == entry.name => guard.decide(entry, authenticated),
            _ => guard.before_each(entry, from, authenticated),
        };
        Some((entry, decision))
    })
}

#[component]
pub fn RouteOutlet() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let pathname = use_location().pathname;
    let guard = RouteGuard::default();
    let previous = StoredValue::new(None::<RouteName>);
    let decision = route_decision(
        move || pathname.get(),
        move || auth.is_authenticated(),
        guard,
        previous,
    );

    move || {
        let Some((entry, decision)) = decision.get() else {
            log::debug!("no route for {}", pathname.get_untracked());
            return view! { <NotFoundPage/> }.into_any();
        };
        if let Some(target) = guard.redirect_target(decision) {
            return view! { <Redirect path=target.path()/> }.into_any();
        }

        previous.set_value(Some(entry.name));
        pages::render(entry.view)
    }
}
