//! Login page with username + password form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submits through `AuthContext::login`. There is no explicit navigation on
//! success: once the flag flips, the route guard moves the user off `/login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::auth::AuthError;
use crate::net::types::Credentials;
use crate::state::session::AuthContext;

const MISSING_FIELDS: &str = "Enter both username and password.";

/// Trim the username and require both fields. Passwords are kept verbatim.
fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.trim().is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(Credentials::new(username, password))
}

/// What a form submit should do.
#[derive(Debug, PartialEq, Eq)]
enum Submit {
    /// A login is already in flight; drop the submit.
    Ignore,
    Invalid(&'static str),
    Send(Credentials),
}

fn plan_submit(busy: bool, username: &str, password: &str) -> Submit {
    if busy {
        return Submit::Ignore;
    }
    match validate_login_input(username, password) {
        Ok(credentials) => Submit::Send(credentials),
        Err(message) => Submit::Invalid(message),
    }
}

fn login_failed_message(error: &AuthError) -> String {
    format!("Login failed: {error}")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = match plan_submit(auth.is_busy(), &username.get(), &password.get()) {
            Submit::Send(credentials) => credentials,
            Submit::Invalid(message) => {
                info.set(message.to_owned());
                return;
            }
            Submit::Ignore => return,
        };
        info.set("Signing in...".to_owned());

        leptos::task::spawn_local(async move {
            // On success this page is unmounted by the guard redirect.
            if let Err(e) = auth.login(credentials).await {
                info.set(login_failed_message(&e));
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Stockview"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || auth.is_busy()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account? "
                    <A href="/register">"Register"</A>
                </p>
            </div>
        </div>
    }
}
