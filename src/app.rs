//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::components::Router;

use crate::components::nav_bar::NavBar;
use crate::net::auth::{AuthConfig, HttpAuthService};
use crate::router::outlet::RouteOutlet;
use crate::state::auth::AuthStore;
use crate::state::session::AuthContext;

/// Root application component.
///
/// Creates the single auth store, provides it as context, and mounts the
/// guarded route outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AuthConfig::default();
    log::debug!("auth api at {}", config.api_base);
    let auth = AuthContext::new(AuthStore::new(HttpAuthService::new(config)));
    provide_context(auth);

    view! {
        <Title text="Stockview"/>

        <Router>
            <NavBar/>
            <main>
                <RouteOutlet/>
            </main>
        </Router>
    }
}
