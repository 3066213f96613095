//! State shared by every request builder.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::method::RestMethod;
use crate::request::{QueryParameters, RequestConfiguration, RequestInformation, RAW_URL_KEY};
use crate::template::TemplateValue;

const ACCEPT: &str = "Accept";
const JSON: &str = "application/json";

/// URL template, path parameters and adapter handle of one builder.
///
/// Child builders are created from [`child_parameters`](Self::child_parameters),
/// so each level of the path adds its own parameter and keeps its parent's.
#[derive(Debug)]
pub struct BaseRequestBuilder<A> {
    adapter: Arc<A>,
    url_template: &'static str,
    path_parameters: BTreeMap<String, TemplateValue>,
}

impl<A> Clone for BaseRequestBuilder<A> {
    fn clone(&self) -> Self {
        Self {
            adapter: Arc::clone(&self.adapter),
            url_template: self.url_template,
            path_parameters: self.path_parameters.clone(),
        }
    }
}

impl<A> BaseRequestBuilder<A> {
    /// Creates builder state from inherited path parameters.
    pub fn new(
        adapter: Arc<A>,
        url_template: &'static str,
        path_parameters: BTreeMap<String, TemplateValue>,
    ) -> Self {
        Self {
            adapter,
            url_template,
            path_parameters,
        }
    }

    /// Creates builder state addressing a raw URL.
    ///
    /// Every inherited path parameter is discarded, and requests built from
    /// this state ignore query parameters.
    pub fn with_raw_url(adapter: Arc<A>, url_template: &'static str, raw_url: impl Into<String>) -> Self {
        let mut path_parameters = BTreeMap::new();
        path_parameters.insert(RAW_URL_KEY.to_string(), TemplateValue::String(raw_url.into()));
        Self::new(adapter, url_template, path_parameters)
    }

    /// Returns the adapter.
    pub fn adapter(&self) -> &Arc<A> {
        &self.adapter
    }

    /// Returns the URL template.
    pub fn url_template(&self) -> &'static str {
        self.url_template
    }

    /// Returns the accumulated path parameters.
    pub fn path_parameters(&self) -> &BTreeMap<String, TemplateValue> {
        &self.path_parameters
    }

    /// Returns this builder's path parameters plus one more, for a child builder.
    pub fn child_parameters(
        &self,
        name: &str,
        value: impl Into<TemplateValue>,
    ) -> BTreeMap<String, TemplateValue> {
        let mut parameters = self.path_parameters.clone();
        parameters.insert(name.to_string(), value.into());
        parameters
    }

    /// Builds request information with `Accept: application/json` and the
    /// caller's configuration applied.
    pub fn request_information<Q: QueryParameters>(
        &self,
        method: RestMethod,
        config: Option<&RequestConfiguration<Q>>,
    ) -> RequestInformation {
        let mut info = RequestInformation::new(method, self.url_template, self.path_parameters.clone());
        info.headers.try_add(ACCEPT, JSON);
        info.configure(config);
        info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "{+baseurl}/communications/calls/{call%2Did}{?%24expand,%24select}";

    crate::query_parameters! {
        struct Select {
            select: Vec<String> => "%24select",
        }
    }

    fn base() -> BaseRequestBuilder<()> {
        let mut params = BTreeMap::new();
        params.insert("baseurl".to_string(), TemplateValue::from("https://h/v1.0"));
        BaseRequestBuilder::new(Arc::new(()), "{+baseurl}/communications/calls", params)
    }

    #[test]
    fn test_child_parameters_keep_parent() {
        let params = base().child_parameters("call%2Did", "c1");
        assert_eq!(params.len(), 2);
        let child = BaseRequestBuilder::new(Arc::new(()), TEMPLATE, params);
        let info = child.request_information::<()>(RestMethod::Get, None);
        assert_eq!(
            info.url().unwrap().as_str(),
            "https://h/v1.0/communications/calls/c1"
        );
        assert_eq!(
            info.headers.get("accept").collect::<Vec<_>>(),
            vec!["application/json"]
        );
    }

    #[test]
    fn test_raw_url_ignores_query_configuration() {
        let builder = BaseRequestBuilder::with_raw_url(
            Arc::new(()),
            TEMPLATE,
            "https://h/v1.0/communications/calls/other",
        );
        let config = RequestConfiguration::new().with_query(Select {
            select: Some(vec!["id".to_string()]),
        });
        let info = builder.request_information(RestMethod::Get, Some(&config));
        assert_eq!(
            info.url().unwrap().as_str(),
            "https://h/v1.0/communications/calls/other"
        );
    }
}
