//! Layered error types for request construction, transport and decoding.

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod store_error;
mod validation_error;

pub use api_error::{ApiError, MappedError};
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use store_error::StoreError;
pub use validation_error::ValidationError;
