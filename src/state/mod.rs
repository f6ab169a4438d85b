//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is the framework-free store; `session` wraps it in the reactive
//! handle components receive through context.

pub mod auth;
pub mod session;
