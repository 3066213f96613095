//! Authentication and authorization errors.

use thiserror::Error;

/// Errors related to request authentication.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credential was configured for an API that requires one.
    #[error("Missing credential for {provider}")]
    MissingCredential {
        /// The API that requires the credential.
        provider: String,
    },

    /// The credential cannot be expressed as an HTTP header.
    #[error("Invalid credential format")]
    InvalidCredentialFormat,

    /// Server rejected the credentials (HTTP 401).
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message from the server.
        message: String,
    },

    /// Server refused the operation (HTTP 403).
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The request that was denied.
        operation: String,
    },
}
