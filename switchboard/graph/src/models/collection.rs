//! Paged collection responses.

use serde::{Deserialize, Serialize};

/// One page of an OData collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct CollectionResponse<T> {
    #[serde(default)]
    pub value: Vec<T>,
    /// URL of the next page; absent on the last page.
    #[serde(rename = "@odata.nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
    /// Total item count, present when `$count=true` was requested.
    #[serde(rename = "@odata.count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self {
            value: Vec::new(),
            next_link: None,
            count: None,
        }
    }
}

impl<T> CollectionResponse<T> {
    /// Returns `true` if another page follows.
    pub fn has_next(&self) -> bool {
        self.next_link.is_some()
    }
}
