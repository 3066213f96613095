//! Top-level API error type.

use super::{AuthError, ClientError, ConfigError, StoreError, ValidationError};
use thiserror::Error;

/// Boxed error produced by an [`ErrorMapping`](crate::adapter::ErrorMapping) factory.
pub type MappedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all SDK operations.
///
/// Errors the server described in its own payload arrive as
/// [`ApiError::Mapped`]; use [`ApiError::mapped`] to recover the concrete
/// payload type registered in the operation's error mapping.
///
/// ## Examples
///
/// ```rust,ignore
/// use switchboard::ApiError;
///
/// match builder.get(None).await {
///     Err(ApiError::Mapped { status, source }) => eprintln!("HTTP {status}: {source}"),
///     Err(other) => eprintln!("request failed: {other}"),
///     Ok(call) => println!("{call:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client errors (network, timeout, unmapped status codes).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response decoding errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Request construction errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Backing store access errors.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Error payload decoded through the operation's error mapping.
    #[error("HTTP {status}: {source}")]
    Mapped {
        /// The HTTP status code returned.
        status: u16,
        /// The decoded error payload.
        source: MappedError,
    },
}

impl ApiError {
    /// Returns the mapped error payload if it is of type `E`.
    pub fn mapped<E>(&self) -> Option<&E>
    where
        E: std::error::Error + 'static,
    {
        match self {
            Self::Mapped { source, .. } => source.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// Returns the HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Mapped { status, .. } => Some(*status),
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("resource missing")]
    struct Missing;

    #[test]
    fn test_from_client_error() {
        let client_err = ClientError::Timeout { duration_ms: 5000 };
        let api_err: ApiError = client_err.into();
        assert!(matches!(api_err, ApiError::Client(_)));
    }

    #[test]
    fn test_mapped_downcast() {
        let err = ApiError::Mapped {
            status: 404,
            source: Box::new(Missing),
        };
        assert!(err.mapped::<Missing>().is_some());
        assert!(err.mapped::<std::fmt::Error>().is_none());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: resource missing");
    }

    #[test]
    fn test_store_error_is_transparent() {
        let err: ApiError = StoreError::TypeMismatch {
            key: "subject".to_string(),
            message: "invalid type".to_string(),
        }
        .into();
        assert!(err.to_string().contains("subject"));
        assert_eq!(err.status_code(), None);
    }
}
