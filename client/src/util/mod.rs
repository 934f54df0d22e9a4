//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router/browser concerns from page logic so the
//! form flows can run against test doubles.

pub mod navigate;
