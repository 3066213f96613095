//! Request adapters: the seam between request builders and the HTTP stack.

mod auth;
mod error_mapping;
mod http;

use std::future::Future;
use std::str::FromStr;

use bytes::Bytes;

use crate::error::ApiError;
use crate::request::RequestInformation;
use crate::serialization::Parsable;

pub use auth::ApiAuthMethod;
pub use error_mapping::{parse_error, ErrorFactory, ErrorMapping};
pub use http::{HttpRequestAdapter, HttpRequestAdapterBuilder};

/// Sends [`RequestInformation`] and decodes the response.
///
/// Every method resolves the status code through the supplied
/// [`ErrorMapping`] before decoding. A `204 No Content` or an empty body
/// decodes as `Ok(None)`. Dropping the returned future cancels the request.
pub trait RequestAdapter: Send + Sync {
    /// Returns the base URL injected into `{+baseurl}`.
    fn base_url(&self) -> &str;

    /// Sends the request and decodes a JSON body as `T`.
    fn send<T: Parsable>(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> impl Future<Output = Result<Option<T>, ApiError>> + Send;

    /// Sends the request and decodes a JSON array body.
    fn send_collection<T: Parsable>(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> impl Future<Output = Result<Option<Vec<T>>, ApiError>> + Send;

    /// Sends the request and parses a text body as a primitive.
    fn send_primitive<T>(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> impl Future<Output = Result<Option<T>, ApiError>> + Send
    where
        T: FromStr + Send;

    /// Sends the request and returns the raw body bytes.
    fn send_bytes(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> impl Future<Output = Result<Option<Bytes>, ApiError>> + Send;

    /// Sends the request and discards any body.
    fn send_no_content(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
