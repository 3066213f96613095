//! Helpers that follow `opc-next-page` through every page of a listing.

use tracing::{debug, warn};

use crate::client::ResourceManagerClient;
use crate::error::OciError;
use crate::models::{JobSummary, StackSummary, WorkRequestSummary};
use crate::requests::{
    ListJobsRequest, ListStacksRequest, ListWorkRequestsRequest, OciResponse, RequestOptions,
};

/// Collects pages until a response arrives without a next-page token.
///
/// A token equal to the one just requested ends the listing with
/// [`OciError::RepeatedPage`].
async fn collect_pages<T, F, Fut>(
    operation: &'static str,
    first_page: Option<String>,
    mut fetch: F,
) -> Result<Vec<T>, OciError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<OciResponse<Vec<T>>, OciError>>,
{
    let mut items = Vec::new();
    let mut page = first_page;
    let mut pages = 0usize;
    loop {
        let response = fetch(page.clone()).await?;
        pages += 1;
        items.extend(response.body);
        match response.headers.opc_next_page {
            Some(next) if page.as_deref() == Some(next.as_str()) => {
                warn!(operation, pages, token = %next, "next-page token repeated");
                return Err(OciError::RepeatedPage {
                    operation,
                    token: next,
                });
            }
            Some(next) if !next.is_empty() => page = Some(next),
            _ => break,
        }
    }
    debug!(operation, pages, items = items.len(), "listing complete");
    Ok(items)
}

impl ResourceManagerClient {
    /// Lists every stack matching `request`, starting at `request.page`.
    pub async fn list_all_stacks(
        &self,
        request: &ListStacksRequest,
        options: &RequestOptions,
    ) -> Result<Vec<StackSummary>, OciError> {
        collect_pages("list_stacks", request.page.clone(), |page| {
            let request = ListStacksRequest {
                page,
                ..request.clone()
            };
            async move { self.list_stacks(&request, options).await }
        })
        .await
    }

    /// Lists every job matching `request`, starting at `request.page`.
    pub async fn list_all_jobs(
        &self,
        request: &ListJobsRequest,
        options: &RequestOptions,
    ) -> Result<Vec<JobSummary>, OciError> {
        collect_pages("list_jobs", request.page.clone(), |page| {
            let request = ListJobsRequest {
                page,
                ..request.clone()
            };
            async move { self.list_jobs(&request, options).await }
        })
        .await
    }

    /// Lists every work request matching `request`, starting at `request.page`.
    pub async fn list_all_work_requests(
        &self,
        request: &ListWorkRequestsRequest,
        options: &RequestOptions,
    ) -> Result<Vec<WorkRequestSummary>, OciError> {
        collect_pages("list_work_requests", request.page.clone(), |page| {
            let request = ListWorkRequestsRequest {
                page,
                ..request.clone()
            };
            async move { self.list_work_requests(&request, options).await }
        })
        .await
    }
}
