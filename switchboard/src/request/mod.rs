//! Request description: URL template, parameters, headers and body.

mod config;
mod headers;
mod information;
mod query;

pub use config::RequestConfiguration;
pub use headers::RequestHeaders;
pub use information::{RequestInformation, BASE_URL_KEY, RAW_URL_KEY};
pub use query::QueryParameters;
