//! Request signing.

use std::fmt;

use reqwest::header::{HeaderValue, AUTHORIZATION};

use crate::error::OciError;

/// Authenticates an outgoing request just before it is sent.
///
/// Called once per attempt, so retried requests are signed afresh.
pub trait RequestSigner: fmt::Debug + Send + Sync {
    fn sign(&self, request: &mut reqwest::Request) -> Result<(), OciError>;
}

/// Leaves requests untouched, for test servers and proxies that add
/// credentials themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSigner;

impl RequestSigner for NoopSigner {
    fn sign(&self, _request: &mut reqwest::Request) -> Result<(), OciError> {
        Ok(())
    }
}

/// Sends `Authorization: Bearer <token>`, as accepted for resource
/// principal and session tokens.
#[derive(Clone)]
pub struct BearerTokenSigner {
    token: String,
}

impl BearerTokenSigner {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl fmt::Debug for BearerTokenSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerTokenSigner")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl RequestSigner for BearerTokenSigner {
    fn sign(&self, request: &mut reqwest::Request) -> Result<(), OciError> {
        let mut value = HeaderValue::try_from(format!("Bearer {}", self.token))
            .map_err(|e| OciError::Signing(e.to_string()))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}
