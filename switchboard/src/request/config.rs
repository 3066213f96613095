//! Per-call request configuration.

use super::RequestHeaders;

/// Caller-supplied headers and query parameters for one request.
///
/// ## Examples
///
/// ```rust,ignore
/// let config = RequestConfiguration::new()
///     .with_header("ConsistencyLevel", "eventual")
///     .with_query(CollectionQueryParameters { top: Some(5), ..Default::default() });
/// let calls = client.communications().calls().get(Some(&config)).await?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfiguration<Q> {
    /// Headers added to (and overriding) the builder defaults.
    pub headers: RequestHeaders,
    /// Query parameters for the operation.
    pub query_parameters: Option<Q>,
}

impl<Q> Default for RequestConfiguration<Q> {
    fn default() -> Self {
        Self {
            headers: RequestHeaders::new(),
            query_parameters: None,
        }
    }
}

impl<Q> RequestConfiguration<Q> {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header.
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.add(name, value);
        self
    }

    /// Sets the query parameters.
    pub fn with_query(mut self, query: Q) -> Self {
        self.query_parameters = Some(query);
        self
    }
}
