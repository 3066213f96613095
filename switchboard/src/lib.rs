//! Runtime for generated REST client SDKs.
//!
//! The `switchboard` crate holds everything a generated request builder needs
//! beyond its own URL template and types:
//!
//! - **URL templates**: the RFC 6570 subset behind `{+baseurl}/calls/{call%2Did}{?%24top}`
//! - **Request information**: method, path/query parameters, headers, content,
//!   and the raw-URL override
//! - **Backing-store models**: change-tracked property bags declared with
//!   [`backed_model!`], polymorphic unions declared with [`discriminated_union!`]
//! - **Request adapters**: the [`RequestAdapter`] seam and its `reqwest`
//!   implementation with status-code error mapping
//! - **Layered errors**: one `thiserror` enum per failure domain
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use switchboard::{ApiAuthMethod, HttpRequestAdapter};
//!
//! let adapter = HttpRequestAdapter::builder("https://graph.microsoft.com/v1.0")
//!     .auth(ApiAuthMethod::BearerToken, token)
//!     .build()?;
//! let client = switchboard_graph::GraphServiceClient::new(Arc::new(adapter));
//! let call = client.communications().calls().by_call_id("id").get(None).await?;
//! ```

pub mod adapter;
pub mod builder;
pub mod error;
pub mod method;
pub mod request;
pub mod serialization;
pub mod store;
pub mod template;

pub use adapter::{
    parse_error, ApiAuthMethod, ErrorFactory, ErrorMapping, HttpRequestAdapter,
    HttpRequestAdapterBuilder, RequestAdapter,
};
pub use builder::BaseRequestBuilder;
pub use error::{ApiError, AuthError, ClientError, ConfigError, StoreError, ValidationError};
pub use method::RestMethod;
pub use request::{QueryParameters, RequestConfiguration, RequestHeaders, RequestInformation};
pub use serialization::{BackedModel, DiscriminatorRegistry, Parsable};
pub use store::BackingStore;
pub use template::{TemplateValue, UrlTemplate};

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use serde_json;
}
