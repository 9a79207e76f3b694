//! The request and response bodies of the `web` module, and the email parsing rules.

use lazy_regex::regex_is_match;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A predicate deciding whether a (trimmed) string is shaped like an email address.
pub type EmailCheck = fn(&str) -> bool;

// ###################################
// ->   STRUCTS
// ###################################
/// Subscribe request.
/// `email` stays an untyped JSON value so that a missing field, `null` or a non-string
/// can be told apart from a badly formatted address.
#[derive(Debug, PartialEq)]
pub struct SubscribeRequest {
    pub email: Option<Value>,
}

impl SubscribeRequest {
    /// Only a JSON object is a subscribe request. Arrays and scalars give `None`.
    pub fn from_json(body: Value) -> Option<Self> {
        match body {
            Value::Object(mut fields) => Some(Self {
                email: fields.remove("email"),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeResponse {
    pub message: String,
    pub total_subscribers: usize,
}

/// The inspect response: the total and a prefix of the list in storage order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubscribersPreview {
    pub total_subscribers: usize,
    pub subscribers: Vec<String>,
}

impl SubscribersPreview {
    pub fn new(mut subscribers: Vec<String>, preview_len: usize) -> Self {
        let total_subscribers = subscribers.len();
        subscribers.truncate(preview_len);

        Self {
            total_subscribers,
            subscribers,
        }
    }
}

/// A trimmed, lower-cased email address that passed the email check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SubscriberEmail> for String {
    fn from(email: SubscriberEmail) -> Self {
        email.0
    }
}

impl SubscriberEmail {
    /// Parses the raw `email` field of a request.
    /// Absent, `null`, non-string and empty values are `EmailMissing`.
    pub fn parse(value: Option<Value>, email_check: EmailCheck) -> Result<Self, EmailParsingError> {
        let value = match value {
            Some(Value::String(value)) if !value.is_empty() => value,
            _ => return Err(EmailParsingError::EmailMissing),
        };

        let trimmed = value.trim();
        if !email_check(trimmed) {
            return Err(EmailParsingError::EmailInvalid);
        }

        Ok(Self(trimmed.to_lowercase()))
    }
}

/// Syntactic sanity check only, NOT a full email grammar:
/// something without whitespace or `@`, an `@`, then a domain containing a `.`.
pub fn looks_like_email(value: &str) -> bool {
    regex_is_match!(r"^[^\s@]+@[^\s@]+\.[^\s@]+$", value)
}

// ###################################
// ->   ERROR
// ###################################
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmailParsingError {
    #[error("email missing or not a string")]
    EmailMissing,
    #[error("email invalid")]
    EmailInvalid,
}
