//! Networking modules for the authentication collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` defines the collaborator contract the store depends on plus the
//! browser implementation; `types` defines the wire schema it speaks.

pub mod auth;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;
