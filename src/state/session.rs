//! Reactive handle over the auth store, provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` holds plain `Cell`s, so nothing re-renders when it changes.
//! `AuthContext` owns the store and mirrors its state into signals after each
//! action. Components read the signals and call `login`/`logout`; they never
//! write the signals directly.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::net::auth::{AuthError, AuthService, HttpAuthService};
use crate::net::types::Credentials;
use crate::state::auth::AuthStore;

/// `Copy` handle to the application's single `AuthStore`.
///
/// Components look it up as `expect_context::<AuthContext>()`, which resolves
/// to the browser service.
pub struct AuthContext<S = HttpAuthService> {
    store: StoredValue<Rc<AuthStore<S>>, LocalStorage>,
    authenticated: RwSignal<bool>,
    busy: RwSignal<bool>,
}

impl<S> Clone for AuthContext<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for AuthContext<S> {}

impl<S: AuthService + 'static> AuthContext<S> {
    pub fn new(store: AuthStore<S>) -> Self {
        let authenticated = RwSignal::new(store.is_authenticated());
        let busy = RwSignal::new(store.is_login_pending());
        Self { store: StoredValue::new_local(Rc::new(store)), authenticated, busy }
    }

    /// Reactive read of the authentication flag.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Reactive read of whether a login is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// # Errors
    ///
    /// Propagates the store's login error; the flag is unchanged on error.
    pub async fn login(self, credentials: Credentials) -> Result<(), AuthError> {
        let store = self.store.with_value(Rc::clone);
        self.busy.set(true);
        let result = store.login(&credentials).await;
        self.sync(&store);
        result
    }

    pub fn logout(self) {
        let store = self.store.with_value(Rc::clone);
        store.logout();
        self.sync(&store);
    }

    fn sync(self, store: &AuthStore<S>) {
        self.authenticated.set(store.is_authenticated());
        self.busy.set(store.is_login_pending());
    }
}
