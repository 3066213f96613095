//! Client for OCI Resource Manager: Terraform stacks, the jobs that plan,
//! apply and destroy them, and the work requests that track asynchronous
//! changes.
//!
//! - **Endpoints** come from a [`Region`] (realm-aware second-level domain)
//!   or an explicit override
//! - **Retries** are off by default; [`RetryPolicy::default_policy`] retries
//!   throttling, server errors and `409 IncorrectState` with jittered
//!   backoff, reusing the same `opc-retry-token`
//! - **Signing** is pluggable through [`RequestSigner`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use switchboard_oci::{ClientConfiguration, ListJobsRequest, RequestOptions, ResourceManagerClient};
//!
//! let client = ResourceManagerClient::new(ClientConfiguration::from_env()?)?;
//! let jobs = client
//!     .list_all_jobs(&ListJobsRequest::for_stack(stack_id), &RequestOptions::default())
//!     .await?;
//! ```

mod client;
mod config;
mod error;
pub mod models;
mod paging;
mod region;
mod requests;
mod retry;
mod signer;

pub use client::ResourceManagerClient;
pub use config::{ClientConfiguration, API_VERSION, SERVICE_NAME};
pub use error::{OciError, ServiceError};
pub use region::{Realm, Region};
pub use requests::{
    GetJobLogsRequest, ListJobsRequest, ListStacksRequest, ListWorkRequestsRequest, OciResponse,
    RequestOptions, ResponseHeaders, WorkRequestPageRequest,
};
pub use retry::{retry_token, RetryPolicy, RETRY_TOKEN_LENGTH};
pub use signer::{BearerTokenSigner, NoopSigner, RequestSigner};
