//! The OData error payload returned by every Graph endpoint.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use switchboard::{parse_error, ErrorMapping};

/// `{"error": {...}}` body of a failed Graph request.
///
/// Surfaces through [`switchboard::ApiError::Mapped`]; recover it with
/// `err.mapped::<ODataError>()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ODataError {
    pub error: MainError,
}

impl ODataError {
    /// Error mapping shared by every Graph operation.
    pub fn mapping() -> ErrorMapping {
        ErrorMapping::new().with("XXX", parse_error::<ODataError>)
    }

    /// Returns the service error code, such as `Request_ResourceNotFound`.
    pub fn code(&self) -> &str {
        &self.error.code
    }

    /// Returns the `request-id` the service assigned, if reported.
    pub fn request_id(&self) -> Option<&str> {
        self.error
            .inner_error
            .as_ref()
            .and_then(|inner| inner.request_id.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MainError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ErrorDetails>,
    #[serde(rename = "innerError", default, skip_serializing_if = "Option::is_none")]
    pub inner_error: Option<InnerError>,
}

impl fmt::Display for MainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(target) = &self.target {
            write!(f, " (target: {target})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorDetails {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

/// Diagnostics attached by the service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InnerError {
    #[serde(rename = "request-id", default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(rename = "client-request-id", default, skip_serializing_if = "Option::is_none")]
    pub client_request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Anything else the service reported.
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}
