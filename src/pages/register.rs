//! Registration page. Account creation is handled outside this client; the
//! page points new users back to sign-in.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <section class="register-page">
            <h1>"Register"</h1>
            <p>"Ask an administrator for an account, then sign in."</p>
            <A href="/login">"Back to sign in"</A>
        </section>
    }
}
