//! Iteration across `@odata.nextLink` pages.

use std::collections::{BTreeMap, VecDeque};
use std::sync::Arc;

use switchboard::{ApiError, Parsable, RequestAdapter, RequestInformation, RestMethod, ValidationError};
use tracing::{debug, warn};

use crate::builders::graph_errors;
use crate::models::CollectionResponse;

/// Walks a paged collection, fetching each next page from its raw
/// `@odata.nextLink` URL.
///
/// ## Examples
///
/// ```rust,ignore
/// let first = client.communications().calls().get(None).await?.unwrap_or_default();
/// let calls = PageIterator::new(client.adapter().clone(), first).collect_all().await?;
/// ```
#[derive(Debug)]
pub struct PageIterator<A, T> {
    adapter: Arc<A>,
    buffer: VecDeque<T>,
    next_link: Option<String>,
    pages: usize,
}

impl<A: RequestAdapter, T: Parsable> PageIterator<A, T> {
    /// Starts from an already fetched first page.
    pub fn new(adapter: Arc<A>, first_page: CollectionResponse<T>) -> Self {
        Self {
            adapter,
            buffer: first_page.value.into(),
            next_link: first_page.next_link,
            pages: 1,
        }
    }

    /// Returns the number of pages fetched so far.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Returns the next item, fetching a page when the buffer runs dry.
    ///
    /// ## Errors
    ///
    /// Returns the error of the failed page request, or
    /// [`ValidationError::RepeatedPageLink`] when a page links to itself.
    pub async fn next(&mut self) -> Result<Option<T>, ApiError> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Ok(Some(item));
            }
            if !self.fetch_next_page().await? {
                return Ok(None);
            }
        }
    }

    /// Drains every remaining item.
    ///
    /// ## Errors
    ///
    /// Returns the error of the first failed page request.
    pub async fn collect_all(mut self) -> Result<Vec<T>, ApiError> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    async fn fetch_next_page(&mut self) -> Result<bool, ApiError> {
        let Some(link) = self.next_link.take() else {
            return Ok(false);
        };
        debug!(page = self.pages + 1, "fetching next page");

        let mut info = RequestInformation::new(RestMethod::Get, "", BTreeMap::new());
        info.set_raw_url(link.clone());
        info.headers.add("Accept", "application/json");

        let page: CollectionResponse<T> = self
            .adapter
            .send(info, graph_errors())
            .await?
            .unwrap_or_default();
        self.pages += 1;
        if page.next_link.as_deref() == Some(link.as_str()) {
            warn!(pages = self.pages, %link, "next link repeated");
            return Err(ValidationError::RepeatedPageLink { link }.into());
        }
        self.buffer.extend(page.value);
        self.next_link = page.next_link;
        Ok(true)
    }
}
