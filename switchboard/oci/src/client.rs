//! The Resource Manager client.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use switchboard::{ClientError, ConfigError, TemplateValue, UrlTemplate};
use tracing::{debug, instrument, warn, Span};

use crate::config::ClientConfiguration;
use crate::error::{OciError, ServiceError};
use crate::models::{
    ChangeStackCompartmentDetails, CreateJobDetails, CreateStackDetails, Job, JobSummary,
    LogEntry, Stack, StackSummary, UpdateJobDetails, UpdateStackDetails, WorkRequest,
    WorkRequestError, WorkRequestLogEntry, WorkRequestSummary,
};
use crate::requests::{
    GetJobLogsRequest, ListJobsRequest, ListStacksRequest, ListWorkRequestsRequest, OciResponse,
    Params, RequestOptions, ResponseHeaders, WorkRequestPageRequest,
};
use crate::retry::{retry_token, RetryPolicy};
use crate::signer::RequestSigner;

const BASE_URL_KEY: &str = "baseurl";

/// One operation ready to be sent, possibly several times.
struct Call<'a> {
    operation: &'static str,
    method: Method,
    template: &'static str,
    params: Params,
    body: Option<Bytes>,
    accept: &'static str,
    retry_token: Option<String>,
    options: &'a RequestOptions,
}

impl<'a> Call<'a> {
    fn new(
        operation: &'static str,
        method: Method,
        template: &'static str,
        params: Params,
        options: &'a RequestOptions,
    ) -> Self {
        Self {
            operation,
            method,
            template,
            params,
            body: None,
            accept: "application/json",
            retry_token: None,
            options,
        }
    }

    fn json<B: Serialize>(mut self, body: &B) -> Result<Self, OciError> {
        let encoded = serde_json::to_vec(body).map_err(|source| OciError::Encode {
            operation: self.operation,
            source,
        })?;
        self.body = Some(Bytes::from(encoded));
        Ok(self)
    }

    fn accept(mut self, accept: &'static str) -> Self {
        self.accept = accept;
        self
    }

    /// Uses the caller's retry token, or a fresh one shared by every attempt.
    fn with_retry_token(mut self) -> Self {
        self.retry_token = Some(
            self.options
                .opc_retry_token
                .clone()
                .unwrap_or_else(retry_token),
        );
        self
    }
}

/// Client for OCI Resource Manager (`20180917`).
///
/// ## Examples
///
/// ```rust,ignore
/// use switchboard_oci::{ClientConfiguration, ListStacksRequest, Region, RequestOptions, ResourceManagerClient};
///
/// let client = ResourceManagerClient::new(ClientConfiguration::for_region(Region::parse("iad")))?;
/// let stacks = client
///     .list_stacks(&ListStacksRequest::in_compartment(compartment), &RequestOptions::default())
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct ResourceManagerClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    retry_policy: RetryPolicy,
    signer: Arc<dyn RequestSigner>,
}

impl ResourceManagerClient {
    /// Creates a client.
    ///
    /// ## Errors
    ///
    /// Returns [`OciError::Config`] if no usable endpoint is configured and
    /// [`OciError::Client`] if the HTTP client cannot be built.
    pub fn new(config: ClientConfiguration) -> Result<Self, OciError> {
        let base_url = config.base_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;
        debug!(%base_url, "resource manager client ready");
        Ok(Self {
            http,
            base_url,
            timeout: config.timeout,
            retry_policy: config.retry_policy,
            signer: config.signer,
        })
    }

    /// Versioned service root.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replaces the default retry policy.
    pub fn set_retry_policy(&mut self, policy: RetryPolicy) {
        self.retry_policy = policy;
    }

    // Stacks

    pub async fn create_stack(
        &self,
        details: &CreateStackDetails,
        options: &RequestOptions,
    ) -> Result<OciResponse<Stack>, OciError> {
        let call = Call::new("create_stack", Method::POST, "{+baseurl}/stacks", Params::default(), options)
            .json(details)?
            .with_retry_token();
        self.send_json(call).await
    }

    pub async fn get_stack(
        &self,
        stack_id: &str,
        options: &RequestOptions,
    ) -> Result<OciResponse<Stack>, OciError> {
        let params = Params::default().set("stackId", stack_id);
        let call = Call::new("get_stack", Method::GET, "{+baseurl}/stacks/{stackId}", params, options);
        self.send_json(call).await
    }

    pub async fn list_stacks(
        &self,
        request: &ListStacksRequest,
        options: &RequestOptions,
    ) -> Result<OciResponse<Vec<StackSummary>>, OciError> {
        let call = Call::new(
            "list_stacks",
            Method::GET,
            "{+baseurl}/stacks{?compartmentId,id,lifecycleState,displayName,sortBy,sortOrder,limit,page}",
            request.query(),
            options,
        );
        self.send_json(call).await
    }

    /// Sends `if-match` from `options` when set.
    pub async fn update_stack(
        &self,
        stack_id: &str,
        details: &UpdateStackDetails,
        options: &RequestOptions,
    ) -> Result<OciResponse<Stack>, OciError> {
        let params = Params::default().set("stackId", stack_id);
        let call = Call::new("update_stack", Method::PUT, "{+baseurl}/stacks/{stackId}", params, options)
            .json(details)?;
        self.send_json(call).await
    }

    /// Sends `if-match` from `options` when set.
    pub async fn delete_stack(
        &self,
        stack_id: &str,
        options: &RequestOptions,
    ) -> Result<OciResponse<()>, OciError> {
        let params = Params::default().set("stackId", stack_id);
        let call = Call::new("delete_stack", Method::DELETE, "{+baseurl}/stacks/{stackId}", params, options);
        self.send_empty(call).await
    }

    /// Moves a stack; the returned headers carry `opc-work-request-id`.
    pub async fn change_stack_compartment(
        &self,
        stack_id: &str,
        details: &ChangeStackCompartmentDetails,
        options: &RequestOptions,
    ) -> Result<OciResponse<()>, OciError> {
        let params = Params::default().set("stackId", stack_id);
        let call = Call::new(
            "change_stack_compartment",
            Method::POST,
            "{+baseurl}/stacks/{stackId}/actions/changeCompartment",
            params,
            options,
        )
        .json(details)?
        .with_retry_token();
        self.send_empty(call).await
    }

    /// Downloads the stack's Terraform configuration as a zip archive.
    pub async fn get_stack_tf_config(
        &self,
        stack_id: &str,
        options: &RequestOptions,
    ) -> Result<OciResponse<Bytes>, OciError> {
        let params = Params::default().set("stackId", stack_id);
        let call = Call::new(
            "get_stack_tf_config",
            Method::GET,
            "{+baseurl}/stacks/{stackId}/tfConfig",
            params,
            options,
        )
        .accept("application/zip");
        self.send_bytes(call).await
    }

    // Jobs

    pub async fn create_job(
        &self,
        details: &CreateJobDetails,
        options: &RequestOptions,
    ) -> Result<OciResponse<Job>, OciError> {
        let call = Call::new("create_job", Method::POST, "{+baseurl}/jobs", Params::default(), options)
            .json(details)?
            .with_retry_token();
        self.send_json(call).await
    }

    pub async fn get_job(
        &self,
        job_id: &str,
        options: &RequestOptions,
    ) -> Result<OciResponse<Job>, OciError> {
        let params = Params::default().set("jobId", job_id);
        let call = Call::new("get_job", Method::GET, "{+baseurl}/jobs/{jobId}", params, options);
        self.send_json(call).await
    }

    pub async fn list_jobs(
        &self,
        request: &ListJobsRequest,
        options: &RequestOptions,
    ) -> Result<OciResponse<Vec<JobSummary>>, OciError> {
        let call = Call::new(
            "list_jobs",
            Method::GET,
            "{+baseurl}/jobs{?compartmentId,stackId,id,lifecycleState,displayName,sortBy,sortOrder,limit,page}",
            request.query(),
            options,
        );
        self.send_json(call).await
    }

    /// Sends `if-match` from `options` when set.
    pub async fn update_job(
        &self,
        job_id: &str,
        details: &UpdateJobDetails,
        options: &RequestOptions,
    ) -> Result<OciResponse<Job>, OciError> {
        let params = Params::default().set("jobId", job_id);
        let call = Call::new("update_job", Method::PUT, "{+baseurl}/jobs/{jobId}", params, options)
            .json(details)?;
        self.send_json(call).await
    }

    /// Requests cancellation of a queued or running job.
    pub async fn cancel_job(
        &self,
        job_id: &str,
        options: &RequestOptions,
    ) -> Result<OciResponse<()>, OciError> {
        let params = Params::default().set("jobId", job_id);
        let call = Call::new("cancel_job", Method::DELETE, "{+baseurl}/jobs/{jobId}", params, options);
        self.send_empty(call).await
    }

    pub async fn get_job_logs(
        &self,
        request: &GetJobLogsRequest,
        options: &RequestOptions,
    ) -> Result<OciResponse<Vec<LogEntry>>, OciError> {
        let call = Call::new(
            "get_job_logs",
            Method::GET,
            "{+baseurl}/jobs/{jobId}/logs{?type*,levelGreaterThanOrEqualTo,sortOrder,limit,page,timestampGreaterThanOrEqualTo,timestampLessThanOrEqualTo}",
            request.query(),
            options,
        );
        self.send_json(call).await
    }

    /// Returns the raw log text.
    pub async fn get_job_logs_content(
        &self,
        job_id: &str,
        options: &RequestOptions,
    ) -> Result<OciResponse<String>, OciError> {
        let params = Params::default().set("jobId", job_id);
        let call = Call::new(
            "get_job_logs_content",
            Method::GET,
            "{+baseurl}/jobs/{jobId}/logs/content",
            params,
            options,
        )
        .accept("text/plain");
        let response = self.send_bytes(call).await?;
        Ok(OciResponse {
            body: String::from_utf8_lossy(&response.body).into_owned(),
            headers: response.headers,
        })
    }

    /// Downloads the job's Terraform configuration as a zip archive.
    pub async fn get_job_tf_config(
        &self,
        job_id: &str,
        options: &RequestOptions,
    ) -> Result<OciResponse<Bytes>, OciError> {
        let params = Params::default().set("jobId", job_id);
        let call = Call::new(
            "get_job_tf_config",
            Method::GET,
            "{+baseurl}/jobs/{jobId}/tfConfig",
            params,
            options,
        )
        .accept("application/zip");
        self.send_bytes(call).await
    }

    /// Downloads the Terraform state file the job produced.
    pub async fn get_job_tf_state(
        &self,
        job_id: &str,
        options: &RequestOptions,
    ) -> Result<OciResponse<Bytes>, OciError> {
        let params = Params::default().set("jobId", job_id);
        let call = Call::new(
            "get_job_tf_state",
            Method::GET,
            "{+baseurl}/jobs/{jobId}/tfState",
            params,
            options,
        )
        .accept("application/octet-stream");
        self.send_bytes(call).await
    }

    // Work requests

    pub async fn get_work_request(
        &self,
        work_request_id: &str,
        options: &RequestOptions,
    ) -> Result<OciResponse<WorkRequest>, OciError> {
        let params = Params::default().set("workRequestId", work_request_id);
        let call = Call::new(
            "get_work_request",
            Method::GET,
            "{+baseurl}/workRequests/{workRequestId}",
            params,
            options,
        );
        self.send_json(call).await
    }

    pub async fn list_work_requests(
        &self,
        request: &ListWorkRequestsRequest,
        options: &RequestOptions,
    ) -> Result<OciResponse<Vec<WorkRequestSummary>>, OciError> {
        let call = Call::new(
            "list_work_requests",
            Method::GET,
            "{+baseurl}/workRequests{?compartmentId,resourceId,limit,page}",
            request.query(),
            options,
        );
        self.send_json(call).await
    }

    pub async fn list_work_request_errors(
        &self,
        request: &WorkRequestPageRequest,
        options: &RequestOptions,
    ) -> Result<OciResponse<Vec<WorkRequestError>>, OciError> {
        let call = Call::new(
            "list_work_request_errors",
            Method::GET,
            "{+baseurl}/workRequests/{workRequestId}/errors{?limit,page,sortOrder}",
            request.query(),
            options,
        );
        self.send_json(call).await
    }

    pub async fn list_work_request_logs(
        &self,
        request: &WorkRequestPageRequest,
        options: &RequestOptions,
    ) -> Result<OciResponse<Vec<WorkRequestLogEntry>>, OciError> {
        let call = Call::new(
            "list_work_request_logs",
            Method::GET,
            "{+baseurl}/workRequests/{workRequestId}/logs{?limit,page,sortOrder}",
            request.query(),
            options,
        );
        self.send_json(call).await
    }

    // Dispatch

    async fn send_json<T: DeserializeOwned>(&self, call: Call<'_>) -> Result<OciResponse<T>, OciError> {
        let operation = call.operation;
        let (headers, body) = self.execute(call).await?;
        let body = serde_json::from_slice(&body).map_err(|source| OciError::Decode { operation, source })?;
        Ok(OciResponse { body, headers })
    }

    async fn send_bytes(&self, call: Call<'_>) -> Result<OciResponse<Bytes>, OciError> {
        let (headers, body) = self.execute(call).await?;
        Ok(OciResponse { body, headers })
    }

    async fn send_empty(&self, call: Call<'_>) -> Result<OciResponse<()>, OciError> {
        let (headers, _) = self.execute(call).await?;
        Ok(OciResponse { body: (), headers })
    }

    fn url(&self, call: &Call<'_>) -> Result<String, ConfigError> {
        let template = UrlTemplate::parse(call.template)?;
        let mut values = call.params.0.clone();
        values.insert(
            BASE_URL_KEY.to_string(),
            TemplateValue::String(self.base_url.clone()),
        );
        Ok(template.expand(&values))
    }

    fn headers(&self, call: &Call<'_>) -> Result<HeaderMap, ConfigError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(call.accept));
        if call.body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        let optional = [
            ("opc-request-id", call.options.opc_request_id.as_deref()),
            ("if-match", call.options.if_match.as_deref()),
            ("opc-retry-token", call.retry_token.as_deref()),
        ];
        for (name, value) in optional {
            if let Some(value) = value {
                let value = HeaderValue::try_from(value)
                    .map_err(|e| ConfigError::invalid_header(name, e))?;
                headers.insert(HeaderName::from_static(name), value);
            }
        }
        Ok(headers)
    }

    /// Sends the call, retrying per the request's or client's policy.
    #[instrument(
        name = "api_request",
        skip(self, call),
        fields(
            oci.operation = call.operation,
            http.method = %call.method,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn execute(&self, call: Call<'_>) -> Result<(ResponseHeaders, Bytes), OciError> {
        let url = self.url(&call)?;
        Span::current().record("http.url", url.as_str());
        let headers = self.headers(&call)?;
        let policy = call.options.retry_policy.as_ref().unwrap_or(&self.retry_policy);

        let mut attempt = 1;
        loop {
            match self.attempt(&call, &url, &headers).await {
                Ok(response) => {
                    Span::current().record("otel.status_code", "OK");
                    return Ok(response);
                }
                Err(err) if policy.should_retry(attempt, &err) => {
                    let delay = policy.delay_for(attempt);
                    warn!(
                        attempt,
                        max_attempts = policy.max_attempts,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %err,
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => {
                    let otel_status = match err.status_code() {
                        Some(status) if status < 500 => "UNSET",
                        _ => "ERROR",
                    };
                    Span::current().record("otel.status_code", otel_status);
                    return Err(err);
                }
            }
        }
    }

    async fn attempt(
        &self,
        call: &Call<'_>,
        url: &str,
        headers: &HeaderMap,
    ) -> Result<(ResponseHeaders, Bytes), OciError> {
        let mut builder = self
            .http
            .request(call.method.clone(), url)
            .headers(headers.clone());
        if let Some(body) = &call.body {
            builder = builder.body(body.clone());
        }
        let mut request = builder.build().map_err(ClientError::Request)?;
        self.signer.sign(&mut request)?;

        let response = self.http.execute(request).await.map_err(|e| {
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

        let headers = ResponseHeaders::from_headers(response.headers());
        let body = response.bytes().await.map_err(ClientError::Request)?;
        if !status.is_success() {
            return Err(ServiceError::from_body(
                call.operation,
                status.as_u16(),
                headers.opc_request_id,
                &body,
            )
            .into());
        }
        Ok((headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::Region;

    fn client() -> ResourceManagerClient {
        ResourceManagerClient::new(ClientConfiguration::for_region(Region::parse("iad"))).unwrap()
    }

    #[test]
    fn test_url_expands_path_and_query() {
        let client = client();
        let options = RequestOptions::default();
        let request = ListJobsRequest {
            limit: Some(5),
            ..ListJobsRequest::for_stack("ocid1.ormstack.oc1..a/b")
        };
        let call = Call::new(
            "list_jobs",
            Method::GET,
            "{+baseurl}/jobs{?compartmentId,stackId,id,lifecycleState,displayName,sortBy,sortOrder,limit,page}",
            request.query(),
            &options,
        );
        assert_eq!(
            client.url(&call).unwrap(),
            "https://resourcemanager.us-ashburn-1.oraclecloud.com/20180917/jobs?stackId=ocid1.ormstack.oc1..a%2Fb&limit=5"
        );
    }

    #[test]
    fn test_headers_include_options() {
        let client = client();
        let options = RequestOptions::default().request_id("req-7").if_match("\"e1\"");
        let call = Call::new("update_job", Method::PUT, "{+baseurl}/jobs/{jobId}", Params::default(), &options)
            .json(&UpdateJobDetails::default())
            .unwrap();
        let headers = client.headers(&call).unwrap();
        assert_eq!(headers["opc-request-id"], "req-7");
        assert_eq!(headers["if-match"], "\"e1\"");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert!(headers.get("opc-retry-token").is_none());
    }

    #[test]
    fn test_caller_retry_token_is_kept() {
        let options = RequestOptions::default().retry_token("mine");
        let call = Call::new("create_job", Method::POST, "{+baseurl}/jobs", Params::default(), &options)
            .with_retry_token();
        assert_eq!(call.retry_token.as_deref(), Some("mine"));
    }

    #[test]
    fn test_invalid_header_value_is_config_error() {
        let client = client();
        let options = RequestOptions::default().request_id("bad\nid");
        let call = Call::new("get_job", Method::GET, "{+baseurl}/jobs/{jobId}", Params::default(), &options);
        assert!(matches!(
            client.headers(&call),
            Err(ConfigError::InvalidHeader { .. })
        ));
    }
}
