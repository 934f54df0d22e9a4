//! Reusable view components shared by the auth pages.
//!
//! DESIGN
//! ======
//! Components receive state through props and callbacks only; they never
//! own form data.

pub mod auth_card;
pub mod field_input;
