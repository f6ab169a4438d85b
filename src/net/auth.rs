//! Authentication collaborator: the contract the auth store depends on and
//! its browser implementation.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthStore` never talks HTTP or storage itself. It calls an `AuthService`,
//! which in the browser is `HttpAuthService`: a bearer token persisted in
//! `localStorage` plus two REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `AuthError`. Login errors are returned to the caller;
//! logout errors are reported but the store clears its flag regardless.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::types::Credentials;
#[cfg(feature = "csr")]
use super::types::LoginResponse;
use crate::util::storage;

const DEFAULT_API_BASE: &str = "/api";
const DEFAULT_TOKEN_KEY: &str = "stockview_token";

/// Errors produced by the authentication collaborator and the store.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("login request failed: {status}")]
    Http { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("session storage error: {0}")]
    Storage(String),
    #[error("a login is already in progress")]
    LoginInProgress,
    #[error("authentication is only available in the browser")]
    Unavailable,
}

/// External authentication service.
///
/// Implementations own credential validation and session persistence.
/// All calls happen on the UI thread, so futures need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait AuthService {
    /// Whether a session currently exists. Synchronous and side-effect free.
    fn is_authenticated(&self) -> bool;

    /// Validate `credentials` and establish a session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for rejected credentials and
    /// another variant for transport or storage failures.
    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError>;

    /// Clear the session. Any network call is fire-and-forget.
    ///
    /// # Errors
    ///
    /// Returns an error if local session state could not be cleared.
    fn logout(&self) -> Result<(), AuthError>;
}

/// Endpoint and storage settings for `HttpAuthService`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Base URL of the REST API, e.g. `/api` or `https://host/api`.
    pub api_base: String,
    /// `localStorage` key holding the session token.
    pub token_key: String,
}

impl Default for AuthConfig {
    /// `api_base` comes from `STOCKVIEW_API_BASE` at compile time, else `/api`.
    fn default() -> Self {
        Self {
            api_base: option_env!("STOCKVIEW_API_BASE").unwrap_or(DEFAULT_API_BASE).to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
        }
    }
}

impl AuthConfig {
    #[must_use]
    pub fn login_url(&self) -> String {
        self.endpoint("auth/login")
    }

    #[must_use]
    pub fn logout_url(&self) -> String {
        self.endpoint("auth/logout")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.api_base.trim_end_matches('/'))
    }
}

/// Map a login response status to the collaborator outcome. `204 No Content`
/// is not a success: a login response must carry a token body.
#[cfg(any(test, feature = "csr"))]
fn classify_login_status(status: u16) -> Result<(), AuthError> {
    match status {
        204 => Err(AuthError::Http { status }),
        200..=299 => Ok(()),
        401 | 403 => Err(AuthError::InvalidCredentials),
        _ => Err(AuthError::Http { status }),
    }
}

/// Browser collaborator: token in `localStorage`, login/logout over HTTP.
#[derive(Clone, Debug)]
pub struct HttpAuthService {
    config: AuthConfig,
}

impl HttpAuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    fn token(&self) -> Option<String> {
        storage::load_string(&self.config.token_key).filter(|t| !t.is_empty())
    }
}

impl AuthService for HttpAuthService {
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    async fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.config.login_url())
                .json(credentials)
                .map_err(|e| AuthError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            classify_login_status(resp.status())?;
            let body: LoginResponse = resp.json().await.map_err(|e| AuthError::Network(e.to_string()))?;
            storage::save_string(&self.config.token_key, &body.token).map_err(AuthError::Storage)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }

    fn logout(&self) -> Result<(), AuthError> {
        let token = self.token();
        let cleared = storage::remove(&self.config.token_key).map_err(AuthError::Storage);

        #[cfg(feature = "csr")]
        {
            if let Some(token) = token {
                let url = self.config.logout_url();
                wasm_bindgen_futures::spawn_local(async move {
                    let sent = gloo_net::http::Request::post(&url)
                        .header("Authorization", &format!("Bearer {token}"))
                        .send()
                        .await;
                    if let Err(e) = sent {
                        log::warn!("logout request failed: {e}");
                    }
                });
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }

        cleared
    }
}
