//! Error types surfaced by the auth forms.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is recovered at the form boundary and rendered inline. The
//! `Display` text of each variant is exactly what the user sees, so transport
//! details live only in [`TransportError`] and never reach the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Local pre-submission check failure. No request is made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The terms-acceptance checkbox is unticked.
    #[error("Please agree to the Terms, Privacy Policy and Fees")]
    TermsNotAccepted,
    /// At least one required field is an empty string.
    #[error("All fields are required")]
    MissingFields,
}

/// The request failed before a usable response body was obtained.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(detail: impl std::fmt::Display) -> Self {
        Self(detail.to_string())
    }
}

/// Failure of a sign-up attempt, from any stage of the flow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Well-formed error body from the backend; carries the resolved message.
    #[error("{0}")]
    Application(String),
    #[error("Network error. Please try again.")]
    Transport(#[from] TransportError),
}

impl AuthError {
    /// Text rendered in the form's inline error slot.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
