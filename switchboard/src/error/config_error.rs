//! Request construction and configuration errors.

use thiserror::Error;

/// Errors raised while building a request or configuring a client.
///
/// These are programmer or configuration errors: nothing was sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required configuration field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// URL template contains invalid expression syntax.
    #[error("Invalid URL template: {message}")]
    InvalidPathTemplate {
        /// Description of the template error.
        message: String,
    },

    /// A header name or value is not valid HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        message: String,
    },

    /// A required environment variable is absent.
    #[error("Missing environment variable: {name}")]
    MissingEnv {
        /// The variable name.
        name: &'static str,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates an invalid URL template error.
    pub fn invalid_template(message: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            message: message.into(),
        }
    }

    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}
