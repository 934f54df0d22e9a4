//! Form state for the auth pages.
//!
//! DESIGN
//! ======
//! Each page owns exactly one form model. Models are plain structs so the
//! submission logic can be exercised without a reactive runtime; pages hold
//! them in an `RwSignal` and reach them through [`store::FormStore`].

pub mod fields;
pub mod log_in;
pub mod sign_up;
pub mod store;
