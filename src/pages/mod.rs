//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Routing refers to views by `ViewId`; `render` is the one place that turns
//! an id into a component.

pub mod backtest;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod stocks;

use leptos::prelude::*;

use crate::router::routes::ViewId;

/// Build the page registered for `id`.
pub fn render(id: ViewId) -> AnyView {
    match id {
        ViewId::Home => view! { <home::HomePage/> }.into_any(),
        ViewId::Login => view! { <login::LoginPage/> }.into_any(),
        ViewId::Register => view! { <register::RegisterPage/> }.into_any(),
        ViewId::Stocks => view! { <stocks::StocksPage/> }.into_any(),
        ViewId::Backtest => view! { <backtest::BacktestPage/> }.into_any(),
        ViewId::Backtest2000 => view! { <backtest::Backtest2000Page/> }.into_any(),
    }
}
