//! In-memory `AuthService` for store, router, and page tests.

use std::cell::{Cell, RefCell};

use futures::channel::oneshot;

use super::auth::{AuthError, AuthService};
use super::types::Credentials;

pub(crate) const VALID_USERNAME: &str = "ada";
pub(crate) const VALID_PASSWORD: &str = "hunter2";

/// Session lives in a `Cell`; logins succeed only for
/// `VALID_USERNAME`/`VALID_PASSWORD`.
#[derive(Default)]
pub(crate) struct MockAuthService {
    session: Cell<bool>,
    login_calls: Cell<u32>,
    logout_calls: Cell<u32>,
    logout_error: Option<AuthError>,
    login_error: Option<AuthError>,
    gate: RefCell<Option<oneshot::Receiver<()>>>,
}

impl MockAuthService {
    pub(crate) fn signed_in() -> Self {
        let service = Self::default();
        service.session.set(true);
        service
    }

    /// Every login fails with `error` before credentials are checked.
    pub(crate) fn failing_login(error: AuthError) -> Self {
        Self { login_error: Some(error), ..Self::default() }
    }

    /// Logout clears the session but still reports `error`.
    pub(crate) fn failing_logout(mut self, error: AuthError) -> Self {
        self.logout_error = Some(error);
        self
    }

    /// The next login suspends until the returned sender fires (or drops).
    pub(crate) fn hold_next_login(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        *self.gate.borrow_mut() = Some(rx);
        tx
    }

    pub(crate) fn has_session(&self) -> bool {
        self.session.get()
    }

    pub(crate) fn login_calls(&self) -> u32 {
        self.login_calls.get()
    }

    pub(crate) fn logout_calls(&self) -> u32 {
        self.logout_calls.get()
    }
}

impl AuthService for MockAuthService {
    fn is_authenticated(&self) -> bool {
        self.session.get()
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        self.login_calls.set(self.login_calls.get() + 1);
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        if let Some(error) = &self.login_error {
            return Err(error.clone());
        }
        if credentials.username != VALID_USERNAME || credentials.password != VALID_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }
        self.session.set(true);
        Ok(())
    }

    fn logout(&self) -> Result<(), AuthError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.session.set(false);
        match &self.logout_error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

pub(crate) fn valid_credentials() -> Credentials {
    Credentials::new(VALID_USERNAME, VALID_PASSWORD)
}

pub(crate) fn wrong_password() -> Credentials {
    Credentials::new(VALID_USERNAME, "guess")
}
