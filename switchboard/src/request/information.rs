//! The request description handed to a [`RequestAdapter`](crate::RequestAdapter).

use std::collections::BTreeMap;

use bytes::Bytes;
use serde::Serialize;
use url::Url;

use super::{QueryParameters, RequestConfiguration, RequestHeaders};
use crate::error::{ConfigError, ValidationError};
use crate::method::RestMethod;
use crate::template::{TemplateValue, UrlTemplate};

/// Path parameter holding a raw URL that replaces template expansion.
pub const RAW_URL_KEY: &str = "request-raw-url";

/// Path parameter the adapter fills with its base URL.
pub const BASE_URL_KEY: &str = "baseurl";

const CONTENT_TYPE: &str = "Content-Type";
const JSON: &str = "application/json";

/// Everything needed to send one HTTP request.
///
/// Builders create it from their URL template and path parameters, then add
/// query parameters, headers and content.
///
/// ## Examples
///
/// ```rust
/// use std::collections::BTreeMap;
/// use switchboard::{RequestInformation, RestMethod, TemplateValue};
///
/// let mut params = BTreeMap::new();
/// params.insert("baseurl".to_string(), TemplateValue::from("https://graph.microsoft.com/v1.0"));
/// params.insert("call%2Did".to_string(), TemplateValue::from("c-1"));
///
/// let info = RequestInformation::new(
///     RestMethod::Get,
///     "{+baseurl}/communications/calls/{call%2Did}{?%24select}",
///     params,
/// );
/// assert_eq!(
///     info.url().unwrap().as_str(),
///     "https://graph.microsoft.com/v1.0/communications/calls/c-1"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestInformation {
    /// HTTP method.
    pub method: RestMethod,
    /// URL template the request expands.
    pub url_template: String,
    /// Path parameters keyed by template variable name.
    pub path_parameters: BTreeMap<String, TemplateValue>,
    /// Query parameters keyed by wire name.
    pub query_parameters: BTreeMap<String, TemplateValue>,
    /// Request headers.
    pub headers: RequestHeaders,
    /// Request body.
    pub content: Option<Bytes>,
}

impl RequestInformation {
    /// Creates a request for the given template and path parameters.
    pub fn new(
        method: RestMethod,
        url_template: impl Into<String>,
        path_parameters: BTreeMap<String, TemplateValue>,
    ) -> Self {
        Self {
            method,
            url_template: url_template.into(),
            path_parameters,
            ..Default::default()
        }
    }

    /// Resolves the final URL.
    ///
    /// A raw URL set through [`set_raw_url`](Self::set_raw_url) wins over the
    /// template: path and query parameters are ignored in that case.
    ///
    /// ## Errors
    ///
    /// Returns a [`ConfigError`] if the template is malformed or the result is
    /// not an absolute URL.
    pub fn url(&self) -> Result<Url, ConfigError> {
        if let Some(raw) = self.path_parameters.get(RAW_URL_KEY) {
            return Ok(Url::parse(&raw.to_string())?);
        }

        let template = UrlTemplate::parse(&self.url_template)?;
        let mut values = self.path_parameters.clone();
        values.extend(
            self.query_parameters
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        Ok(Url::parse(&template.expand(&values))?)
    }

    /// Replaces every path parameter with a raw URL.
    pub fn set_raw_url(&mut self, url: impl Into<String>) {
        self.path_parameters.clear();
        self.path_parameters
            .insert(RAW_URL_KEY.to_string(), TemplateValue::String(url.into()));
    }

    /// Returns the raw URL override, if any.
    pub fn raw_url(&self) -> Option<String> {
        self.path_parameters.get(RAW_URL_KEY).map(ToString::to_string)
    }

    /// Copies every set query parameter under its wire name.
    pub fn add_query_parameters<Q: QueryParameters + ?Sized>(&mut self, query: &Q) {
        for (name, value) in query.to_query_pairs() {
            self.query_parameters.insert(name.to_string(), value);
        }
    }

    /// Applies caller headers and query parameters.
    pub fn configure<Q: QueryParameters>(&mut self, config: Option<&RequestConfiguration<Q>>) {
        let Some(config) = config else {
            return;
        };
        self.headers.extend_from(&config.headers);
        if let Some(query) = &config.query_parameters {
            self.add_query_parameters(query);
        }
    }

    /// Serializes `body` as JSON content.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::JsonParse`] if serialization fails.
    pub fn set_content_from_parsable<T: Serialize + ?Sized>(
        &mut self,
        body: &T,
    ) -> Result<(), ValidationError> {
        let json = serde_json::to_vec(body)?;
        self.headers.set(CONTENT_TYPE, JSON);
        self.content = Some(Bytes::from(json));
        Ok(())
    }

    /// Sets raw content with an explicit content type.
    pub fn set_stream_content(&mut self, content: impl Into<Bytes>, content_type: &str) {
        self.headers.set(CONTENT_TYPE, content_type);
        self.content = Some(content.into());
    }
}
