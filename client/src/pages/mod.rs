//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signal and the submit handler, and delegates
//! rendering details to `components`.

pub mod home;
pub mod log_in;
pub mod sign_up;
