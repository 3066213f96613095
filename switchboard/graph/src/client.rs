//! Entry point and environment configuration.

use std::sync::Arc;
use std::time::Duration;

use switchboard::{ApiAuthMethod, ApiError, ConfigError, HttpRequestAdapter, RequestAdapter};
use tracing::debug;

use crate::builders::CommunicationsRequestBuilder;

/// Graph v1.0 root.
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Hosts that receive the access token by default.
pub const DEFAULT_ALLOWED_HOSTS: &[&str] = &[
    "graph.microsoft.com",
    "graph.microsoft.us",
    "dod-graph.microsoft.us",
    "graph.microsoft.de",
    "microsoftgraph.chinacloudapi.cn",
    "canary.graph.microsoft.com",
];

/// Connection settings for [`GraphServiceClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    pub base_url: String,
    pub access_token: Option<String>,
    pub timeout: Duration,
    /// Hosts that receive the access token; empty means any host.
    pub allowed_hosts: Vec<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout: Duration::from_secs(30),
            allowed_hosts: DEFAULT_ALLOWED_HOSTS.iter().map(|h| h.to_string()).collect(),
        }
    }
}

impl GraphConfig {
    /// Reads `GRAPH_BASE_URL` and `GRAPH_ACCESS_TOKEN`.
    ///
    /// A custom base URL lifts the host restriction, so tokens reach a
    /// proxy or test server.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if no access token is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var("GRAPH_BASE_URL") {
            debug!(%base_url, "using GRAPH_BASE_URL");
            config.base_url = base_url;
            config.allowed_hosts.clear();
        }
        let token = std::env::var("GRAPH_ACCESS_TOKEN").map_err(|_| ConfigError::MissingEnv {
            name: "GRAPH_ACCESS_TOKEN",
        })?;
        config.access_token = Some(token);
        Ok(config)
    }

    /// Builds the HTTP adapter these settings describe.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn adapter(&self) -> Result<HttpRequestAdapter, ApiError> {
        let mut builder = HttpRequestAdapter::builder(&self.base_url)
            .timeout(self.timeout)
            .allowed_hosts(self.allowed_hosts.iter().cloned());
        if let Some(token) = &self.access_token {
            builder = builder.auth(ApiAuthMethod::BearerToken, token);
        }
        builder.build()
    }
}

/// Root of the Graph request builder tree.
///
/// ## Examples
///
/// ```rust,ignore
/// use switchboard_graph::{GraphConfig, GraphServiceClient};
///
/// let client = GraphServiceClient::from_config(&GraphConfig::from_env()?)?;
/// let call = client.communications().calls().by_call_id("57dab8b1").get(None).await?;
/// ```
#[derive(Debug)]
pub struct GraphServiceClient<A> {
    adapter: Arc<A>,
}

impl<A> Clone for GraphServiceClient<A> {
    fn clone(&self) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
        }
    }
}

impl<A: RequestAdapter> GraphServiceClient<A> {
    pub fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    /// Returns the `/communications` builder.
    pub fn communications(&self) -> CommunicationsRequestBuilder<A> {
        CommunicationsRequestBuilder::new(Arc::clone(&self.adapter), Default::default())
    }
}

impl GraphServiceClient<HttpRequestAdapter> {
    /// Creates a client over a `reqwest` adapter.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn from_config(config: &GraphConfig) -> Result<Self, ApiError> {
        Ok(Self::new(Arc::new(config.adapter()?)))
    }
}
