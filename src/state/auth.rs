//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard and user-aware components read the flag; only `login` and
//! `logout` write it. The external `AuthService` is the source of truth, and
//! the flag mirrors it after every action completes.
//!
//! CONCURRENCY
//! ===========
//! Single UI thread, so plain `Cell`s. The only hazard is re-entrancy: a second
//! `login` while one is awaiting the service is rejected instead of racing.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::Cell;

use crate::net::auth::{AuthError, AuthService};
use crate::net::types::Credentials;

/// Session-lifetime authentication flag plus the actions that change it.
pub struct AuthStore<S> {
    service: S,
    authenticated: Cell<bool>,
    login_pending: Cell<bool>,
}

impl<S: AuthService> AuthStore<S> {
    /// Build the store, seeding the flag from the service's session check.
    pub fn new(service: S) -> Self {
        let authenticated = service.is_authenticated();
        log::debug!("auth store initialized (authenticated={authenticated})");
        Self {
            service,
            authenticated: Cell::new(authenticated),
            login_pending: Cell::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Whether a `login` call is currently awaiting the service.
    pub fn is_login_pending(&self) -> bool {
        self.login_pending.get()
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Log in through the service. The flag only flips after the service
    /// confirms; on error it keeps its previous value.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::LoginInProgress` if another login is pending (the
    /// service is not called), otherwise whatever the service returned.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let Some(_pending) = PendingLogin::acquire(&self.login_pending) else {
            log::warn!("login for {} rejected: another login is pending", credentials.username);
            return Err(AuthError::LoginInProgress);
        };

        match self.service.login(credentials).await {
            Ok(()) => {
                self.authenticated.set(true);
                log::info!("login succeeded for {}", credentials.username);
                Ok(())
            }
            Err(e) => {
                log::warn!("login failed for {}: {e}", credentials.username);
                Err(e)
            }
        }
    }

    /// Log out. Best-effort: the flag is cleared even if the service fails.
    pub fn logout(&self) {
        if let Err(e) = self.service.logout() {
            log::warn!("logout did not complete cleanly, clearing session flag anyway: {e}");
        } else {
            log::info!("logged out");
        }
        self.authenticated.set(false);
    }
}

/// Marks a login as in flight; released on completion or when the login
/// future is dropped.
struct PendingLogin<'a>(&'a Cell<bool>);

impl<'a> PendingLogin<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) { None } else { Some(Self(flag)) }
    }
}

impl Drop for PendingLogin<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
