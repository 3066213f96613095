//! Response decoding errors.

use thiserror::Error;

/// Errors while decoding a response body.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Response body was not valid UTF-8 text.
    #[error("Response body is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A text response could not be parsed as the requested primitive.
    #[error("Cannot parse '{value}' as {expected}")]
    Primitive {
        /// The raw text.
        value: String,
        /// Name of the target type.
        expected: &'static str,
    },

    /// Response content type doesn't match the expected format.
    #[error("Unexpected content type: expected {expected}, got {actual}")]
    ContentTypeMismatch {
        /// The expected content type.
        expected: String,
        /// The actual content type received.
        actual: String,
    },

    /// Empty response body when content was required.
    #[error("Empty response body")]
    EmptyBody,

    /// A paged response pointed back at the page that produced it.
    #[error("Next page link repeats the current page: {link}")]
    RepeatedPageLink {
        /// The repeated link.
        link: String,
    },
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_) | Self::Utf8(_) | Self::Primitive { .. })
    }
}
