//! Client configuration.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use switchboard::ConfigError;
use tracing::debug;

use crate::region::Region;
use crate::retry::RetryPolicy;
use crate::signer::{BearerTokenSigner, NoopSigner, RequestSigner};

/// Service name used in regional endpoints.
pub const SERVICE_NAME: &str = "resourcemanager";

/// API version path segment.
pub const API_VERSION: &str = "20180917";

/// Settings for [`ResourceManagerClient`](crate::ResourceManagerClient).
///
/// Either a region or an explicit endpoint is required; the endpoint wins
/// when both are set.
#[derive(Clone)]
pub struct ClientConfiguration {
    pub region: Option<Region>,
    /// Service root without the API version, e.g. `http://localhost:8080`.
    pub endpoint: Option<String>,
    pub timeout: Duration,
    /// Applied to requests that do not carry their own policy.
    pub retry_policy: RetryPolicy,
    pub signer: Arc<dyn RequestSigner>,
}

impl fmt::Debug for ClientConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfiguration")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .field("retry_policy", &self.retry_policy)
            .field("signer", &self.signer)
            .finish()
    }
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self {
            region: None,
            endpoint: None,
            timeout: Duration::from_secs(60),
            retry_policy: RetryPolicy::no_retry(),
            signer: Arc::new(NoopSigner),
        }
    }
}

impl ClientConfiguration {
    pub fn for_region(region: Region) -> Self {
        Self {
            region: Some(region),
            ..Self::default()
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    pub fn with_signer(mut self, signer: impl RequestSigner + 'static) -> Self {
        self.signer = Arc::new(signer);
        self
    }

    /// Reads `OCI_REGION`, `OCI_ENDPOINT` and `OCI_AUTH_TOKEN`.
    ///
    /// A token installs a [`BearerTokenSigner`]; without one requests go
    /// out unsigned.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if neither a region nor an
    /// endpoint is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(region) = std::env::var("OCI_REGION") {
            config.region = Some(Region::parse(&region));
        }
        if let Ok(endpoint) = std::env::var("OCI_ENDPOINT") {
            debug!(%endpoint, "using OCI_ENDPOINT");
            config.endpoint = Some(endpoint);
        }
        if config.region.is_none() && config.endpoint.is_none() {
            return Err(ConfigError::MissingEnv { name: "OCI_REGION" });
        }
        if let Ok(token) = std::env::var("OCI_AUTH_TOKEN") {
            config.signer = Arc::new(BearerTokenSigner::new(token));
        }
        Ok(config)
    }

    /// Returns the versioned service root, e.g.
    /// `https://resourcemanager.us-ashburn-1.oraclecloud.com/20180917`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingField`] if neither a region nor an
    /// endpoint is configured, or [`ConfigError::InvalidUrl`] if the
    /// endpoint does not parse.
    pub fn base_url(&self) -> Result<String, ConfigError> {
        let host = match (&self.endpoint, &self.region) {
            (Some(endpoint), _) => endpoint.trim_end_matches('/').to_string(),
            (None, Some(region)) => region.endpoint(SERVICE_NAME),
            (None, None) => return Err(ConfigError::missing_field("region")),
        };
        url::Url::parse(&host)?;
        Ok(format!("{host}/{API_VERSION}"))
    }
}
