//! Top navigation bar.
//!
//! Lists every route the guard would currently let the user open, so links
//! appear and disappear with the auth flag.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::guard::{NavigationDecision, RouteGuard};
use crate::router::routes::{ROUTES, RouteEntry};
use crate::state::session::AuthContext;

/// Table entries the guard lets through for the given auth flag, in table order.
fn allowed_routes(guard: &RouteGuard, authenticated: bool) -> impl Iterator<Item = &'static RouteEntry> + '_ {
    ROUTES
        .iter()
        .filter(move |entry| guard.decide(entry, authenticated) == NavigationDecision::Allow)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let guard = RouteGuard::default();

    let links = move || {
        allowed_routes(&guard, auth.is_authenticated())
            .map(|entry| view! { <A href=entry.path>{entry.title}</A> })
            .collect_view()
    };

    view! {
        <nav class="nav-bar">
            {links}
            <Show when=move || auth.is_authenticated()>
                <button class="nav-bar__logout" on:click=move |_| auth.logout()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
