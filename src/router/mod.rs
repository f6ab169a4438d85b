//! Client-side routing: the route table, the navigation guard, and the outlet
//! component that ties them to the browser location.
//!
//! ARCHITECTURE
//! ============
//! `routes` and `guard` are plain data and pure functions with no Leptos
//! dependency. `outlet` is the only reactive piece.

pub mod guard;
pub mod outlet;
pub mod routes;
