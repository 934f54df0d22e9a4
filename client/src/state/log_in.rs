//! Log-in form model.
//!
//! Submitting only captures the entered values; the page makes no request
//! and does not navigate.

#[cfg(test)]
#[path = "log_in_test.rs"]
mod log_in_test;

use super::fields::{self, FieldSpec};

/// Editable fields on the log-in page, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogInField {
    Email,
    Password,
}

impl LogInField {
    pub const ALL: [Self; 2] = [Self::Email, Self::Password];

    #[must_use]
    pub fn spec(self) -> FieldSpec {
        match self {
            Self::Email => fields::EMAIL,
            Self::Password => fields::PASSWORD,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogInFields {
    pub email: String,
    pub password: String,
}

impl LogInFields {
    #[must_use]
    pub fn get(&self, field: LogInField) -> &str {
        match field {
            LogInField::Email => &self.email,
            LogInField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: LogInField, value: String) {
        match field {
            LogInField::Email => self.email = value,
            LogInField::Password => self.password = value,
        }
    }
}

/// Local state of the log-in page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogInForm {
    pub fields: LogInFields,
    /// "Remember me" checkbox. Not persisted anywhere.
    pub remember_me: bool,
}

impl LogInForm {
    /// Capture the current values. Field contents are never logged.
    pub fn submit(&self) -> LogInFields {
        log::info!("{}", self.submission_summary());
        self.fields.clone()
    }

    fn submission_summary(&self) -> String {
        format!("log-in form submitted: remember_me={}", self.remember_me)
    }
}
