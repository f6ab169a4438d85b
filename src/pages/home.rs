//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::AuthContext;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<AuthContext>();

    view! {
        <section class="home-page">
            <h1>"Stockview"</h1>
            <p>"Browse stock data and run strategy backtests."</p>
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <A href="/login">"Sign in to get started"</A> }
            >
                <A href="/stocks">"Go to stocks"</A>
            </Show>
        </section>
    }
}
