//! Microsoft Graph `/communications` client.
//!
//! Request builders mirror the REST paths: `/communications/calls/{id}/answer`
//! becomes `client.communications().calls().by_call_id(id).answer()`.
//! Every operation maps error responses to [`models::ODataError`], reachable
//! through [`switchboard::ApiError::mapped`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use switchboard_graph::{GraphConfig, GraphServiceClient, models::ODataError};
//!
//! let client = GraphServiceClient::from_config(&GraphConfig::from_env()?)?;
//! match client.communications().calls().by_call_id("missing").get(None).await {
//!     Ok(call) => println!("{call:?}"),
//!     Err(err) => match err.mapped::<ODataError>() {
//!         Some(odata) => eprintln!("graph said {}", odata.code()),
//!         None => eprintln!("{err}"),
//!     },
//! }
//! ```

pub mod builders;
mod client;
pub mod models;
mod page_iterator;

pub use builders::{CollectionQueryParameters, CountQueryParameters, ItemQueryParameters, LogFunctionQueryParameters};
pub use client::{GraphConfig, GraphServiceClient, DEFAULT_ALLOWED_HOSTS, DEFAULT_BASE_URL};
pub use page_iterator::PageIterator;
