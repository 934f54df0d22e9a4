//! Wire DTOs for the sign-up endpoint.
//!
//! DESIGN
//! ======
//! The backend reply is a loosely tagged object: `status` is the discriminant
//! but `data` is not guaranteed to accompany a success. Decoding never fails
//! on a field's shape; the decision is made once in
//! [`AuthResponse::into_user`], reading `status` first and `data` after.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::AuthError;

/// Message shown when an error body carries neither `message` nor `errors`.
pub const SIGN_UP_FAILED_FALLBACK: &str = "Signup failed";

/// JSON body posted to the sign-up endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Reply discriminant. Anything other than `"success"` is a failure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseStatus {
    Success,
    Error,
    #[default]
    Unknown,
}

impl ResponseStatus {
    fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("success") => Self::Success,
            Some("error") => Self::Error,
            _ => Self::Unknown,
        }
    }
}

/// Account created by a successful sign-up.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegisteredUser {
    /// Backend account id; integer ids are normalized to strings.
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

/// Reply body from the sign-up endpoint.
///
/// Every field decodes leniently: a value of the wrong shape reads as absent
/// (or, for `data`, as present but unparsed) instead of failing the body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default, deserialize_with = "deserialize_status")]
    pub status: ResponseStatus,
    /// Raw payload; only read as a [`RegisteredUser`] after a success.
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_list")]
    pub errors: Option<Vec<Option<String>>>,
}

impl AuthResponse {
    /// Interpret the reply once `status` has been read.
    ///
    /// A success carrying a present `data` payload is accepted; the account
    /// inside is returned when it has the expected shape, `None` otherwise.
    /// Anything else is an application error with the most specific message
    /// available.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Application`] for any non-success status or a
    /// success without `data`.
    pub fn into_user(self) -> Result<Option<RegisteredUser>, AuthError> {
        if self.status == ResponseStatus::Success {
            if let Some(data) = self.data.filter(is_present) {
                return Ok(serde_json::from_value(data).ok());
            }
        }
        Err(AuthError::Application(failure_message(
            self.message,
            self.errors,
        )))
    }
}

/// JSON truthiness: `null`, `false`, `0` and `""` count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// `message`, else `errors[0]`, else the fallback. Empty or non-string
/// entries are skipped.
fn failure_message(message: Option<String>, errors: Option<Vec<Option<String>>>) -> String {
    message
        .filter(|m| !m.is_empty())
        .or_else(|| {
            errors
                .and_then(|list| list.into_iter().next())
                .flatten()
                .filter(|e| !e.is_empty())
        })
        .unwrap_or_else(|| SIGN_UP_FAILED_FALLBACK.to_owned())
}

fn deserialize_status<'de, D>(deserializer: D) -> Result<ResponseStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ResponseStatus::from_value(&value))
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

fn deserialize_text_list<'de, D>(deserializer: D) -> Result<Option<Vec<Option<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect(),
        )),
        _ => Ok(None),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(number) if number.is_i64() || number.is_u64() => Ok(number.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
