//! Errors returned by the Resource Manager client.

use serde::Deserialize;
use switchboard::{ClientError, ConfigError};
use thiserror::Error;

/// Error body returned by OCI services.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

/// A non-2xx answer from the service.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{operation} failed with HTTP {status} ({code}): {message}")]
pub struct ServiceError {
    pub status: u16,
    /// Service error code such as `NotAuthorizedOrNotFound` or `IncorrectState`.
    pub code: String,
    pub message: String,
    pub opc_request_id: Option<String>,
    /// Client operation that failed, such as `get_stack`.
    pub operation: &'static str,
}

impl ServiceError {
    /// Builds the error from a response body, tolerating bodies that are not
    /// OCI error JSON.
    pub(crate) fn from_body(
        operation: &'static str,
        status: u16,
        opc_request_id: Option<String>,
        body: &[u8],
    ) -> Self {
        let (code, message) = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => (parsed.code, parsed.message),
            Err(_) => (String::new(), String::from_utf8_lossy(body).into_owned()),
        };
        Self {
            status,
            code,
            message,
            opc_request_id,
            operation,
        }
    }
}

/// Errors from the Resource Manager client.
#[derive(Debug, Error)]
pub enum OciError {
    /// The service answered with an error status.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Transport failure before a response arrived.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Invalid client or request configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A response body did not match the expected model.
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A request body could not be encoded.
    #[error("failed to encode {operation} request: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A request could not be signed.
    #[error("failed to sign request: {0}")]
    Signing(String),

    /// A listing returned the page token it was called with.
    #[error("{operation} returned the same next-page token twice: {token}")]
    RepeatedPage {
        operation: &'static str,
        token: String,
    },
}

impl OciError {
    /// Returns the HTTP status of a service error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Service(e) => Some(e.status),
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns the service error, if this is one.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match self {
            Self::Service(e) => Some(e),
            _ => None,
        }
    }
}
