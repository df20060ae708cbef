//! Error taxonomy for the portal. Validation failures stay local to the login
//! form, authentication failures surface the authenticator's message, and
//! transport or storage failures collapse into one generic message for the UI
//! while the cause goes to the diagnostic log.

use std::fmt;
use thiserror::Error;

/// Shown when the authenticator rejects a login without a message.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";
/// Shown for any failure that is not a credential rejection.
pub const GENERIC_LOGIN_ERROR: &str = "An error occurred during login. Please try again.";

/// Login form fields subject to validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Password,
}

impl Field {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{}", empty_field_message(.0))]
    EmptyField(Field),
}

impl ValidationError {
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::EmptyField(field) => *field,
        }
    }
}

const fn empty_field_message(field: &Field) -> &'static str {
    match field {
        Field::Username => "Please enter a valid username",
        Field::Password => "Please enter your password",
    }
}

/// Every validation failure found in one submission, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub(crate) fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.iter().find(|error| error.field() == field)
    }

    /// Message for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }
}

/// Failure talking to the authenticator itself, as opposed to a rejection.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid response: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to encode session: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failures that leave the login screen editable with a top-level message.
///
/// `Display` is the user-facing text; underlying causes are kept for logging.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("{0}")]
    Authentication(String),
    #[error("An error occurred during login. Please try again.")]
    Transport(#[source] TransportError),
    #[error("An error occurred during login. Please try again.")]
    Storage(#[source] StorageError),
    #[error("An error occurred during login. Please try again.")]
    Config(#[source] ConfigError),
}

impl LoginError {
    /// Builds a rejection, falling back to a generic message when the
    /// authenticator did not provide a usable one.
    #[must_use]
    pub fn rejected(message: Option<String>) -> Self {
        let message = message
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| LOGIN_FAILED_MESSAGE.to_string());
        Self::Authentication(message)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unknown authenticator mode: {0}")]
    UnknownMode(String),
    #[error("invalid mock delay {0:?}: expected milliseconds")]
    InvalidDelay(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
