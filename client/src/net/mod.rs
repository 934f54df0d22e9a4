//! Networking modules for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the HTTP capability used by the sign-up flow and `types`
//! defines the JSON schema exchanged with the backend.

pub mod api;
pub mod types;
