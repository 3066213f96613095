//! Credential placement for outgoing requests.

use reqwest::header::{HeaderName, AUTHORIZATION};
use url::Url;

use crate::error::AuthError;

/// How a credential is attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiAuthMethod {
    /// `Authorization: Bearer <token>`.
    BearerToken,
    /// The credential as the value of the named header.
    ApiKey(String),
    /// The credential as the named query parameter.
    QueryParam(String),
    /// No credential.
    None,
}

impl ApiAuthMethod {
    /// Attaches `credential` to the request.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::InvalidCredentialFormat`] if the header name is invalid.
    pub(crate) fn apply(
        &self,
        request: reqwest::RequestBuilder,
        credential: &str,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        match self {
            Self::BearerToken => Ok(request.header(AUTHORIZATION, format!("Bearer {credential}"))),
            Self::ApiKey(header_name) => {
                let name = HeaderName::try_from(header_name.as_str())
                    .map_err(|_| AuthError::InvalidCredentialFormat)?;
                Ok(request.header(name, credential))
            }
            Self::QueryParam(param_name) => Ok(request.query(&[(param_name.as_str(), credential)])),
            Self::None => Ok(request),
        }
    }
}

/// Returns `true` if a credential may be sent to `url`.
///
/// Credentials only travel over HTTPS (plain HTTP is allowed for loopback
/// hosts) and, when `allowed_hosts` is non-empty, only to those hosts.
pub(crate) fn is_host_allowed(url: &Url, allowed_hosts: &[String]) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let loopback = matches!(host, "localhost" | "127.0.0.1" | "[::1]");
    if url.scheme() != "https" && !loopback {
        return false;
    }
    allowed_hosts.is_empty() || allowed_hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
}
