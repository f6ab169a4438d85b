//! Backtest views (authenticated).

use leptos::prelude::*;

#[component]
pub fn BacktestPage() -> impl IntoView {
    view! {
        <section class="backtest-page">
            <h1>"Backtest"</h1>
        </section>
    }
}

#[component]
pub fn Backtest2000Page() -> impl IntoView {
    view! {
        <section class="backtest-page backtest-page--2000">
            <h1>"Backtest 2000"</h1>
        </section>
    }
}
