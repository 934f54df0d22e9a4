//! Sign-up form model and submission flow.
//!
//! DESIGN
//! ======
//! Submission progress is a single tagged [`SubmitPhase`] instead of separate
//! loading/error flags, so "loading with an error showing" cannot be
//! represented. The async flow in [`submit_sign_up`] is generic over where the
//! form lives ([`FormStore`]), how the request is sent ([`AuthApi`]) and how
//! the app navigates ([`Navigator`]).
//!
//! LIFECYCLE
//! =========
//! `Idle` -> submit -> validation failure -> `Failed(Validation)`
//! `Idle` -> submit -> `Submitting` -> `Succeeded` (navigate home)
//!                                  -> `Failed(Application | Transport)`
//! A later submit from `Failed` starts over at validation.

#[cfg(test)]
#[path = "sign_up_test.rs"]
mod sign_up_test;

use super::fields::{self, FieldSpec};
use super::store::FormStore;
use crate::config::HOME_PATH;
use crate::error::{AuthError, ValidationError};
use crate::net::api::AuthApi;
use crate::net::types::{RegisteredUser, SignUpRequest};
use crate::util::navigate::Navigator;

/// Editable fields on the sign-up page, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignUpField {
    Username,
    Email,
    Password,
}

impl SignUpField {
    pub const ALL: [Self; 3] = [Self::Username, Self::Email, Self::Password];

    #[must_use]
    pub fn spec(self) -> FieldSpec {
        match self {
            Self::Username => fields::USERNAME,
            Self::Email => fields::EMAIL,
            Self::Password => fields::PASSWORD,
        }
    }
}

/// Current text of every sign-up field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpFields {
    #[must_use]
    pub fn get(&self, field: SignUpField) -> &str {
        match field {
            SignUpField::Username => &self.username,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: SignUpField, value: String) {
        match field {
            SignUpField::Username => self.username = value,
            SignUpField::Email => self.email = value,
            SignUpField::Password => self.password = value,
        }
    }
}

/// Where the current submission attempt stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(AuthError),
}

/// Local state of the sign-up page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub fields: SignUpFields,
    pub agree_to_terms: bool,
    pub phase: SubmitPhase,
}

impl SignUpForm {
    /// True only while a request is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Inline error text, present only after a failed attempt.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match &self.phase {
            SubmitPhase::Failed(err) => Some(err.user_message()),
            _ => None,
        }
    }

    /// Start a submission attempt.
    ///
    /// Returns the request to send, having moved to `Submitting`. Returns
    /// `None` when validation fails (the phase then holds the error) or when a
    /// request is already in flight (the phase is left untouched).
    pub fn begin_submit(&mut self) -> Option<SignUpRequest> {
        if self.is_loading() {
            return None;
        }
        match validate_sign_up(&self.fields, self.agree_to_terms) {
            Ok(request) => {
                self.phase = SubmitPhase::Submitting;
                Some(request)
            }
            Err(err) => {
                self.phase = SubmitPhase::Failed(err.into());
                None
            }
        }
    }

    /// Record the outcome of the in-flight request. Always leaves the loading
    /// phase.
    pub fn finish_submit(&mut self, outcome: Result<Option<RegisteredUser>, AuthError>) {
        self.phase = match outcome {
            Ok(_) => SubmitPhase::Succeeded,
            Err(err) => SubmitPhase::Failed(err),
        };
    }
}

/// Presence and consent checks. Terms are checked before fields.
///
/// # Errors
///
/// Returns [`ValidationError::TermsNotAccepted`] when the terms flag is unset,
/// otherwise [`ValidationError::MissingFields`] when any field is empty.
pub fn validate_sign_up(
    fields: &SignUpFields,
    agree_to_terms: bool,
) -> Result<SignUpRequest, ValidationError> {
    if !agree_to_terms {
        return Err(ValidationError::TermsNotAccepted);
    }
    if SignUpField::ALL.iter().any(|f| fields.get(*f).is_empty()) {
        return Err(ValidationError::MissingFields);
    }
    Ok(SignUpRequest {
        username: fields.username.clone(),
        email: fields.email.clone(),
        password: fields.password.clone(),
    })
}

/// Run one sign-up attempt against `store`.
///
/// Validation failures and duplicate submits return without touching the
/// network. On success the form is marked `Succeeded` and the app navigates
/// home; every other outcome lands in `Failed` with the message to display.
pub async fn submit_sign_up<S, A, N>(store: &S, api: &A, navigator: &N)
where
    S: FormStore<SignUpForm>,
    A: AuthApi,
    N: Navigator,
{
    let Some(Some(request)) = store.update_form(SignUpForm::begin_submit) else {
        return;
    };

    let outcome = match api.sign_up(&request).await {
        Ok(response) => response.into_user(),
        Err(err) => {
            log::warn!("sign-up request failed: {err}");
            Err(err.into())
        }
    };

    let created = outcome
        .as_ref()
        .ok()
        .map(|user| user.as_ref().map(|u| u.username.clone()));
    store.update_form(|form| form.finish_submit(outcome));

    if let Some(username) = created {
        match username {
            Some(username) => log::info!("account created for {username}"),
            None => log::info!("account created; reply data not in the expected shape"),
        }
        navigator.navigate(HOME_PATH);
    }
}
