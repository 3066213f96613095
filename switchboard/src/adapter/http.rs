//! `reqwest` implementation of [`RequestAdapter`].

use std::str::FromStr;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use tracing::{debug, instrument, Span};
use url::Url;

use super::auth::{is_host_allowed, ApiAuthMethod};
use super::{ErrorMapping, RequestAdapter};
use crate::error::{ApiError, AuthError, ClientError, ConfigError, ValidationError};
use crate::request::{RequestInformation, BASE_URL_KEY};
use crate::serialization::Parsable;
use crate::template::TemplateValue;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring an [`HttpRequestAdapter`].
#[derive(Debug)]
pub struct HttpRequestAdapterBuilder {
    base_url: String,
    timeout: Duration,
    default_headers: HeaderMap,
    auth: Option<(ApiAuthMethod, String)>,
    allowed_hosts: Vec<String>,
}

impl HttpRequestAdapterBuilder {
    fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            auth: None,
            allowed_hosts: Vec::new(),
        }
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a header sent with every request.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidHeader`] if the name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let name_ref = name.as_ref();
        let header_name = HeaderName::try_from(name_ref)
            .map_err(|e| ConfigError::invalid_header(name_ref, e))?;
        let header_value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| ConfigError::invalid_header(name_ref, e))?;
        self.default_headers.insert(header_name, header_value);
        Ok(self)
    }

    /// Sets the credential and how it is attached.
    pub fn auth(mut self, method: ApiAuthMethod, credential: impl Into<String>) -> Self {
        self.auth = Some((method, credential.into()));
        self
    }

    /// Restricts which hosts receive the credential.
    pub fn allowed_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_hosts = hosts.into_iter().map(Into::into).collect();
        self
    }

    /// Builds the adapter.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<HttpRequestAdapter, ApiError> {
        Url::parse(&self.base_url).map_err(ConfigError::InvalidUrl)?;

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .default_headers(self.default_headers)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(HttpRequestAdapter {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            timeout: self.timeout,
            auth: self.auth,
            allowed_hosts: self.allowed_hosts,
        })
    }
}

/// Sends requests with a pooled `reqwest::Client`.
///
/// ## Examples
///
/// ```rust,ignore
/// use switchboard::{ApiAuthMethod, HttpRequestAdapter};
///
/// let adapter = HttpRequestAdapter::builder("https://graph.microsoft.com/v1.0")
///     .auth(ApiAuthMethod::BearerToken, token)
///     .allowed_hosts(["graph.microsoft.com"])
///     .build()?;
/// ```
#[derive(Debug)]
pub struct HttpRequestAdapter {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
    auth: Option<(ApiAuthMethod, String)>,
    allowed_hosts: Vec<String>,
}

impl HttpRequestAdapter {
    /// Creates a new builder.
    pub fn builder(base_url: impl Into<String>) -> HttpRequestAdapterBuilder {
        HttpRequestAdapterBuilder::new(base_url.into())
    }

    /// Creates an adapter with default settings and no credential.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Self::builder(base_url).build()
    }

    /// Sends the request and returns the body, or `None` for 204 and empty bodies.
    #[instrument(
        name = "api_request",
        skip(self, request, errors),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn execute(
        &self,
        mut request: RequestInformation,
        errors: &ErrorMapping,
    ) -> Result<Option<Bytes>, ApiError> {
        Span::current().record("http.method", request.method.to_string().as_str());
        request.path_parameters.insert(
            BASE_URL_KEY.to_string(),
            TemplateValue::String(self.base_url.clone()),
        );
        let url = request.url()?;
        Span::current().record("http.url", url.as_str());

        let mut builder = self.client.request(request.method.to_reqwest(), url.clone());
        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }
        if let Some(content) = request.content.take() {
            builder = builder.body(content);
        }
        builder = self.apply_auth(builder, &url)?;

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    duration_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                }
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());
        debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);
            let body = error_body(status, response.bytes().await);
            return Err(self.failure(status, &body, errors, &request));
        }

        Span::current().record("otel.status_code", "OK");

        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let body = response.bytes().await.map_err(ClientError::Request)?;
        Ok((!body.is_empty()).then_some(body))
    }

    fn failure(
        &self,
        status: StatusCode,
        body: &[u8],
        errors: &ErrorMapping,
        request: &RequestInformation,
    ) -> ApiError {
        let status_code = status.as_u16();
        let message = if body.is_empty() {
            status.to_string()
        } else {
            String::from_utf8_lossy(body).into_owned()
        };

        if let Some(factory) = errors.resolve(status_code).filter(|_| !body.is_empty()) {
            match factory(body) {
                Ok(source) => {
                    return ApiError::Mapped {
                        status: status_code,
                        source,
                    }
                }
                Err(e) => debug!(status = status_code, error = %e, "error body did not match mapping"),
            }
        }

        match status_code {
            401 => AuthError::AuthenticationFailed { message }.into(),
            403 => AuthError::InsufficientPermissions {
                operation: format!("{} {}", request.method, request.url_template),
            }
            .into(),
            _ => ClientError::HttpStatus {
                status: status_code,
                message,
            }
            .into(),
        }
    }

    fn apply_auth(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        let Some((method, credential)) = &self.auth else {
            return Ok(request);
        };
        if !is_host_allowed(url, &self.allowed_hosts) {
            debug!(host = url.host_str(), "credential withheld for host");
            return Ok(request);
        }
        Ok(method.apply(request, credential)?)
    }
}

impl RequestAdapter for HttpRequestAdapter {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send<T: Parsable>(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> Result<Option<T>, ApiError> {
        let Some(body) = self.execute(request, errors).await? else {
            return Ok(None);
        };
        let parsed = serde_json::from_slice(&body).map_err(ValidationError::JsonParse)?;
        Ok(Some(parsed))
    }

    async fn send_collection<T: Parsable>(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> Result<Option<Vec<T>>, ApiError> {
        let Some(body) = self.execute(request, errors).await? else {
            return Ok(None);
        };
        let parsed = serde_json::from_slice(&body).map_err(ValidationError::JsonParse)?;
        Ok(Some(parsed))
    }

    async fn send_primitive<T>(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> Result<Option<T>, ApiError>
    where
        T: FromStr + Send,
    {
        let Some(body) = self.execute(request, errors).await? else {
            return Ok(None);
        };
        let text = String::from_utf8(body.to_vec()).map_err(ValidationError::Utf8)?;
        let trimmed = text.trim();
        trimmed
            .parse::<T>()
            .map(Some)
            .map_err(|_| {
                ValidationError::Primitive {
                    value: trimmed.to_string(),
                    expected: std::any::type_name::<T>(),
                }
                .into()
            })
    }

    async fn send_bytes(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> Result<Option<Bytes>, ApiError> {
        self.execute(request, errors).await
    }

    async fn send_no_content(
        &self,
        request: RequestInformation,
        errors: &ErrorMapping,
    ) -> Result<(), ApiError> {
        self.execute(request, errors).await.map(|_| ())
    }
}

/// Body of an error response; a failed read is logged and treated as empty.
fn error_body(status: StatusCode, read: Result<Bytes, reqwest::Error>) -> Bytes {
    match read {
        Ok(body) => body,
        Err(e) => {
            debug!(status = status.as_u16(), error = %e, "error body could not be read");
            Bytes::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::parse_error;
    use crate::method::RestMethod;
    use std::collections::BTreeMap;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Presence {
        id: String,
        availability: String,
    }

    #[derive(Debug, serde::Deserialize, thiserror::Error)]
    #[error("{code}")]
    struct Problem {
        code: String,
    }

    fn request(method: RestMethod, template: &str) -> RequestInformation {
        RequestInformation::new(method, template, BTreeMap::new())
    }

    #[tokio::test]
    async fn test_send_decodes_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1.0/presences/p1"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Presence {
                id: "p1".to_string(),
                availability: "Available".to_string(),
            }))
            .mount(&mock_server)
            .await;

        let adapter = HttpRequestAdapter::new(format!("{}/v1.0", mock_server.uri())).unwrap();
        let mut info = request(RestMethod::Get, "{+baseurl}/presences/p1");
        info.headers.try_add("Accept", "application/json");

        let presence: Option<Presence> = adapter.send(info, &ErrorMapping::new()).await.unwrap();
        assert_eq!(presence.unwrap().availability, "Available");
    }

    #[tokio::test]
    async fn test_post_body_and_no_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/calls/c1/reject"))
            .and(body_json(serde_json::json!({"reason": "busy"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let adapter = HttpRequestAdapter::new(mock_server.uri()).unwrap();
        let mut info = request(RestMethod::Post, "{+baseurl}/calls/c1/reject");
        info.set_content_from_parsable(&serde_json::json!({"reason": "busy"}))
            .unwrap();

        adapter
            .send_no_content(info, &ErrorMapping::new())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_mapped_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calls/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({"code": "NotFound"})),
            )
            .mount(&mock_server)
            .await;

        let adapter = HttpRequestAdapter::new(mock_server.uri()).unwrap();
        let mapping = ErrorMapping::new().with("XXX", parse_error::<Problem>);
        let result: Result<Option<Presence>, _> = adapter
            .send(request(RestMethod::Get, "{+baseurl}/calls/missing"), &mapping)
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.mapped::<Problem>().unwrap().code, "NotFound");
    }

    #[tokio::test]
    async fn test_unmapped_statuses() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/unauthorized"))
            .respond_with(ResponseTemplate::new(401).set_body_string("token expired"))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/broken"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let adapter = HttpRequestAdapter::new(mock_server.uri()).unwrap();
        let none = ErrorMapping::new();

        let unauthorized = adapter
            .send_bytes(request(RestMethod::Get, "{+baseurl}/unauthorized"), &none)
            .await;
        assert!(matches!(
            unauthorized,
            Err(ApiError::Auth(AuthError::AuthenticationFailed { .. }))
        ));

        let broken = adapter
            .send_bytes(request(RestMethod::Get, "{+baseurl}/broken"), &none)
            .await;
        assert!(matches!(
            broken,
            Err(ApiError::Client(ClientError::HttpStatus { status: 500, .. }))
        ));
    }

    #[tokio::test]
    async fn test_undecodable_error_body_falls_back_to_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/html-error"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&mock_server)
            .await;

        let adapter = HttpRequestAdapter::new(mock_server.uri()).unwrap();
        let mapping = ErrorMapping::new().with("XXX", parse_error::<Problem>);
        let result = adapter
            .send_bytes(request(RestMethod::Get, "{+baseurl}/html-error"), &mapping)
            .await;
        assert!(matches!(
            result,
            Err(ApiError::Client(ClientError::HttpStatus { status: 502, .. }))
        ));
    }

    #[tokio::test]
    async fn test_send_primitive_parses_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calls/$count"))
            .respond_with(ResponseTemplate::new(200).set_body_string("42\n"))
            .mount(&mock_server)
            .await;

        let adapter = HttpRequestAdapter::new(mock_server.uri()).unwrap();
        let count: Option<i32> = adapter
            .send_primitive(
                request(RestMethod::Get, "{+baseurl}/calls/$count"),
                &ErrorMapping::new(),
            )
            .await
            .unwrap();
        assert_eq!(count, Some(42));
    }

    #[tokio::test]
    async fn test_bearer_token_and_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calls"))
            .and(query_param("$top", "2"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(Vec::<Presence>::new()))
            .mount(&mock_server)
            .await;

        let adapter = HttpRequestAdapter::builder(mock_server.uri())
            .auth(ApiAuthMethod::BearerToken, "secret")
            .build()
            .unwrap();
        let mut info = request(RestMethod::Get, "{+baseurl}/calls{?%24top}");
        info.query_parameters
            .insert("%24top".to_string(), TemplateValue::Integer(2));

        let values: Option<Vec<Presence>> = adapter
            .send_collection(info, &ErrorMapping::new())
            .await
            .unwrap();
        assert_eq!(values, Some(vec![]));
    }

    #[tokio::test]
    async fn test_credential_withheld_for_other_hosts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/calls"))
            .and(header("authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/calls"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let adapter = HttpRequestAdapter::builder(mock_server.uri())
            .auth(ApiAuthMethod::BearerToken, "secret")
            .allowed_hosts(["graph.microsoft.com"])
            .build()
            .unwrap();

        let body = adapter
            .send_bytes(request(RestMethod::Get, "{+baseurl}/calls"), &ErrorMapping::new())
            .await
            .unwrap();
        assert!(body.is_none());
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn test_request_span_records_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/calls/c1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let adapter = HttpRequestAdapter::new(mock_server.uri()).unwrap();
        adapter
            .send_no_content(
                request(RestMethod::Delete, "{+baseurl}/calls/c1"),
                &ErrorMapping::new(),
            )
            .await
            .unwrap();

        assert!(logs_contain("api_request"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_unreadable_error_body_is_logged() {
        let read_error = reqwest::Client::new()
            .get("http://[::1")
            .build()
            .unwrap_err();
        let body = error_body(StatusCode::BAD_GATEWAY, Err(read_error));
        assert!(body.is_empty());
        assert!(logs_contain("error body could not be read"));

        let body = error_body(StatusCode::NOT_FOUND, Ok(Bytes::from_static(b"gone")));
        assert_eq!(body, Bytes::from_static(b"gone"));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpRequestAdapter::new("not a url");
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::InvalidUrl(_)))
        ));
    }

    #[test]
    fn test_invalid_default_header() {
        let result = HttpRequestAdapter::builder("https://example.com").default_header("bad header", "v");
        assert!(matches!(
            result,
            Err(ApiError::Config(ConfigError::InvalidHeader { .. }))
        ));
    }
}
