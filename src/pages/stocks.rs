//! Stocks view (authenticated).

use leptos::prelude::*;

#[component]
pub fn StocksPage() -> impl IntoView {
    view! {
        <section class="stocks-page">
            <h1>"Stocks"</h1>
        </section>
    }
}
