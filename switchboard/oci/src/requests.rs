//! Per-request options, list filters and response envelopes.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::HeaderMap;
use switchboard::TemplateValue;

use crate::models::{
    JobLifecycleState, LogEntryLevel, LogEntryType, SortBy, SortOrder, StackLifecycleState,
};
use crate::retry::RetryPolicy;

/// Header-level settings shared by every operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Sent as `opc-request-id`.
    pub opc_request_id: Option<String>,
    /// Sent as `if-match` by update, delete, cancel and compartment moves.
    pub if_match: Option<String>,
    /// Sent as `opc-retry-token` by create operations and compartment
    /// moves; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Overrides the client's retry policy.
    pub retry_policy: Option<RetryPolicy>,
}

impl RequestOptions {
    pub fn request_id(mut self, id: impl Into<String>) -> Self {
        self.opc_request_id = Some(id.into());
        self
    }

    pub fn if_match(mut self, etag: impl Into<String>) -> Self {
        self.if_match = Some(etag.into());
        self
    }

    pub fn retry_token(mut self, token: impl Into<String>) -> Self {
        self.opc_retry_token = Some(token.into());
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = Some(policy);
        self
    }
}

/// Filters for `GET /stacks`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListStacksRequest {
    pub compartment_id: Option<String>,
    pub id: Option<String>,
    pub lifecycle_state: Option<StackLifecycleState>,
    pub display_name: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub page: Option<String>,
}

impl ListStacksRequest {
    pub fn in_compartment(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: Some(compartment_id.into()),
            ..Self::default()
        }
    }

    pub(crate) fn query(&self) -> Params {
        Params::default()
            .opt("compartmentId", self.compartment_id.as_ref())
            .opt("id", self.id.as_ref())
            .opt("lifecycleState", self.lifecycle_state)
            .opt("displayName", self.display_name.as_ref())
            .opt("sortBy", self.sort_by)
            .opt("sortOrder", self.sort_order)
            .opt("limit", self.limit)
            .opt("page", self.page.as_ref())
    }
}

/// Filters for `GET /jobs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListJobsRequest {
    pub compartment_id: Option<String>,
    pub stack_id: Option<String>,
    pub id: Option<String>,
    pub lifecycle_state: Option<JobLifecycleState>,
    pub display_name: Option<String>,
    pub sort_by: Option<SortBy>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub page: Option<String>,
}

impl ListJobsRequest {
    pub fn for_stack(stack_id: impl Into<String>) -> Self {
        Self {
            stack_id: Some(stack_id.into()),
            ..Self::default()
        }
    }

    pub(crate) fn query(&self) -> Params {
        Params::default()
            .opt("compartmentId", self.compartment_id.as_ref())
            .opt("stackId", self.stack_id.as_ref())
            .opt("id", self.id.as_ref())
            .opt("lifecycleState", self.lifecycle_state)
            .opt("displayName", self.display_name.as_ref())
            .opt("sortBy", self.sort_by)
            .opt("sortOrder", self.sort_order)
            .opt("limit", self.limit)
            .opt("page", self.page.as_ref())
    }
}

/// Filters for `GET /jobs/{jobId}/logs`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetJobLogsRequest {
    pub job_id: String,
    /// Repeated as `type=...` for each entry.
    pub log_types: Vec<LogEntryType>,
    pub level_greater_than_or_equal_to: Option<LogEntryLevel>,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub page: Option<String>,
    pub timestamp_greater_than_or_equal_to: Option<DateTime<Utc>>,
    pub timestamp_less_than_or_equal_to: Option<DateTime<Utc>>,
}

impl GetJobLogsRequest {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn query(&self) -> Params {
        let types: Vec<String> = self.log_types.iter().map(ToString::to_string).collect();
        Params::default()
            .set("jobId", self.job_id.as_str())
            .set("type", types)
            .opt("levelGreaterThanOrEqualTo", self.level_greater_than_or_equal_to)
            .opt("sortOrder", self.sort_order)
            .opt("limit", self.limit)
            .opt("page", self.page.as_ref())
            .opt(
                "timestampGreaterThanOrEqualTo",
                self.timestamp_greater_than_or_equal_to.map(timestamp),
            )
            .opt(
                "timestampLessThanOrEqualTo",
                self.timestamp_less_than_or_equal_to.map(timestamp),
            )
    }
}

/// Filters for `GET /workRequests`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListWorkRequestsRequest {
    pub compartment_id: String,
    pub resource_id: Option<String>,
    pub limit: Option<u32>,
    pub page: Option<String>,
}

impl ListWorkRequestsRequest {
    pub fn new(compartment_id: impl Into<String>) -> Self {
        Self {
            compartment_id: compartment_id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn query(&self) -> Params {
        Params::default()
            .set("compartmentId", self.compartment_id.as_str())
            .opt("resourceId", self.resource_id.as_ref())
            .opt("limit", self.limit)
            .opt("page", self.page.as_ref())
    }
}

/// Paging for a work request's errors or log entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkRequestPageRequest {
    pub work_request_id: String,
    pub sort_order: Option<SortOrder>,
    pub limit: Option<u32>,
    pub page: Option<String>,
}

impl WorkRequestPageRequest {
    pub fn new(work_request_id: impl Into<String>) -> Self {
        Self {
            work_request_id: work_request_id.into(),
            ..Self::default()
        }
    }

    pub(crate) fn query(&self) -> Params {
        Params::default()
            .set("workRequestId", self.work_request_id.as_str())
            .opt("sortOrder", self.sort_order)
            .opt("limit", self.limit)
            .opt("page", self.page.as_ref())
    }
}

fn timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Template variables for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Params(pub(crate) BTreeMap<String, TemplateValue>);

impl Params {
    pub(crate) fn set(mut self, name: &str, value: impl Into<TemplateValue>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    pub(crate) fn opt<T: ToString>(mut self, name: &str, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.0
                .insert(name.to_string(), TemplateValue::String(value.to_string()));
        }
        self
    }
}

/// Response headers the service documents for Resource Manager operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseHeaders {
    pub opc_request_id: Option<String>,
    pub etag: Option<String>,
    /// Token for the next page of a list; absent on the last page.
    pub opc_next_page: Option<String>,
    /// Work request tracking an asynchronous operation.
    pub opc_work_request_id: Option<String>,
}

impl ResponseHeaders {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let get = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Self {
            opc_request_id: get("opc-request-id"),
            etag: get("etag"),
            opc_next_page: get("opc-next-page"),
            opc_work_request_id: get("opc-work-request-id"),
        }
    }
}

/// A decoded body together with the response headers.
#[derive(Debug, Clone, PartialEq)]
pub struct OciResponse<T> {
    pub body: T,
    pub headers: ResponseHeaders,
}

impl<T> OciResponse<T> {
    pub fn into_body(self) -> T {
        self.body
    }
}
