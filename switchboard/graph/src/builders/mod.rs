//! Request builders for `/communications`.
//!
//! Each builder addresses one URL template. Navigation methods
//! (`calls()`, `by_call_id(..)`, `answer()`) return child builders that
//! inherit the parent's path parameters and adapter.

use std::sync::LazyLock;

use switchboard::{query_parameters, ErrorMapping};

use crate::models::ODataError;

/// Declares a builder struct bound to one URL template.
macro_rules! request_builder {
    ($(#[$meta:meta])* $name:ident => $template:literal) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<A> {
            base: switchboard::BaseRequestBuilder<A>,
        }

        impl<A> Clone for $name<A> {
            fn clone(&self) -> Self {
                Self {
                    base: self.base.clone(),
                }
            }
        }

        impl<A> $name<A> {
            /// URL template addressed by this builder.
            pub const URL_TEMPLATE: &'static str = $template;

            pub(crate) fn new(
                adapter: ::std::sync::Arc<A>,
                path_parameters: ::std::collections::BTreeMap<String, switchboard::TemplateValue>,
            ) -> Self {
                Self {
                    base: switchboard::BaseRequestBuilder::new(adapter, $template, path_parameters),
                }
            }

            /// Returns a builder for `raw_url`.
            ///
            /// The raw URL replaces the template: path parameters inherited
            /// from parent builders and any configured query parameters are
            /// discarded.
            pub fn with_url(&self, raw_url: impl Into<String>) -> Self {
                Self {
                    base: switchboard::BaseRequestBuilder::with_raw_url(
                        ::std::sync::Arc::clone(self.base.adapter()),
                        $template,
                        raw_url,
                    ),
                }
            }

            /// Returns the path parameters accumulated so far.
            pub fn path_parameters(
                &self,
            ) -> &::std::collections::BTreeMap<String, switchboard::TemplateValue> {
                self.base.path_parameters()
            }

            #[allow(dead_code)]
            fn child<B>(
                &self,
                make: fn(
                    ::std::sync::Arc<A>,
                    ::std::collections::BTreeMap<String, switchboard::TemplateValue>,
                ) -> B,
            ) -> B {
                make(
                    ::std::sync::Arc::clone(self.base.adapter()),
                    self.base.path_parameters().clone(),
                )
            }

            #[allow(dead_code)]
            fn child_by<B>(
                &self,
                name: &str,
                value: &str,
                make: fn(
                    ::std::sync::Arc<A>,
                    ::std::collections::BTreeMap<String, switchboard::TemplateValue>,
                ) -> B,
            ) -> B {
                make(
                    ::std::sync::Arc::clone(self.base.adapter()),
                    self.base.child_parameters(name, value),
                )
            }
        }
    };
}

/// Adds `get` (paged list) and `post` (create) to a collection builder.
macro_rules! collection_operations {
    ($builder:ident, $model:ty) => {
        impl<A: switchboard::RequestAdapter> $builder<A> {
            /// Lists the collection, one page per call.
            pub async fn get(
                &self,
                config: Option<&switchboard::RequestConfiguration<$crate::builders::CollectionQueryParameters>>,
            ) -> Result<Option<$crate::models::CollectionResponse<$model>>, switchboard::ApiError> {
                let info = self.to_get_request_information(config);
                switchboard::RequestAdapter::send(self.base.adapter().as_ref(), info, $crate::builders::graph_errors()).await
            }

            pub fn to_get_request_information(
                &self,
                config: Option<&switchboard::RequestConfiguration<$crate::builders::CollectionQueryParameters>>,
            ) -> switchboard::RequestInformation {
                self.base.request_information(switchboard::RestMethod::Get, config)
            }

            /// Creates a new item in the collection.
            pub async fn post(
                &self,
                body: &$model,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<Option<$model>, switchboard::ApiError> {
                let info = self.to_post_request_information(body, config)?;
                switchboard::RequestAdapter::send(self.base.adapter().as_ref(), info, $crate::builders::graph_errors()).await
            }

            pub fn to_post_request_information(
                &self,
                body: &$model,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<switchboard::RequestInformation, switchboard::ApiError> {
                let mut info = self.base.request_information(switchboard::RestMethod::Post, config);
                info.set_content_from_parsable(body)?;
                Ok(info)
            }
        }
    };
}

/// Adds `get`, `patch` and `delete` to an item builder.
macro_rules! item_operations {
    ($builder:ident, $model:ty) => {
        impl<A: switchboard::RequestAdapter> $builder<A> {
            /// Reads the item.
            pub async fn get(
                &self,
                config: Option<&switchboard::RequestConfiguration<$crate::builders::ItemQueryParameters>>,
            ) -> Result<Option<$model>, switchboard::ApiError> {
                let info = self.to_get_request_information(config);
                switchboard::RequestAdapter::send(self.base.adapter().as_ref(), info, $crate::builders::graph_errors()).await
            }

            pub fn to_get_request_information(
                &self,
                config: Option<&switchboard::RequestConfiguration<$crate::builders::ItemQueryParameters>>,
            ) -> switchboard::RequestInformation {
                self.base.request_information(switchboard::RestMethod::Get, config)
            }

            /// Updates the item, sending only the properties changed on `body`.
            pub async fn patch(
                &self,
                body: $model,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<Option<$model>, switchboard::ApiError> {
                let info = self.to_patch_request_information(body, config)?;
                switchboard::RequestAdapter::send(self.base.adapter().as_ref(), info, $crate::builders::graph_errors()).await
            }

            pub fn to_patch_request_information(
                &self,
                mut body: $model,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<switchboard::RequestInformation, switchboard::ApiError> {
                switchboard::BackedModel::send_only_changes(&mut body);
                let mut info = self.base.request_information(switchboard::RestMethod::Patch, config);
                info.set_content_from_parsable(&body)?;
                Ok(info)
            }

            /// Deletes the item.
            pub async fn delete(
                &self,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<(), switchboard::ApiError> {
                let info = self.to_delete_request_information(config);
                switchboard::RequestAdapter::send_no_content(self.base.adapter().as_ref(), info, $crate::builders::graph_errors()).await
            }

            pub fn to_delete_request_information(
                &self,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> switchboard::RequestInformation {
                self.base.request_information(switchboard::RestMethod::Delete, config)
            }
        }
    };
}

/// Declares a `$count` builder answering with a plain-text integer.
macro_rules! count_builder {
    ($(#[$meta:meta])* $name:ident => $template:literal) => {
        request_builder! {
            $(#[$meta])*
            $name => $template
        }

        impl<A: switchboard::RequestAdapter> $name<A> {
            /// Returns the number of items matching the filter.
            pub async fn get(
                &self,
                config: Option<&switchboard::RequestConfiguration<$crate::builders::CountQueryParameters>>,
            ) -> Result<Option<i32>, switchboard::ApiError> {
                let info = self.to_get_request_information(config);
                switchboard::RequestAdapter::send_primitive(self.base.adapter().as_ref(), info, $crate::builders::graph_errors()).await
            }

            pub fn to_get_request_information(
                &self,
                config: Option<&switchboard::RequestConfiguration<$crate::builders::CountQueryParameters>>,
            ) -> switchboard::RequestInformation {
                let mut info = self.base.request_information(switchboard::RestMethod::Get, config);
                info.headers.set("Accept", "text/plain;q=0.9");
                info
            }
        }
    };
}

/// Declares a POST action builder.
///
/// Without `returns`, the action answers `204 No Content`.
macro_rules! action_builder {
    ($(#[$meta:meta])* $name:ident => $template:literal) => {
        request_builder! {
            $(#[$meta])*
            $name => $template
        }

        impl<A: switchboard::RequestAdapter> $name<A> {
            /// Invokes the action.
            pub async fn post(
                &self,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<(), switchboard::ApiError> {
                let info = self.to_post_request_information(config);
                switchboard::RequestAdapter::send_no_content(self.base.adapter().as_ref(), info, $crate::builders::graph_errors()).await
            }

            pub fn to_post_request_information(
                &self,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> switchboard::RequestInformation {
                self.base.request_information(switchboard::RestMethod::Post, config)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident => $template:literal, body: $body:ty) => {
        request_builder! {
            $(#[$meta])*
            $name => $template
        }

        impl<A: switchboard::RequestAdapter> $name<A> {
            /// Invokes the action.
            pub async fn post(
                &self,
                body: &$body,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<(), switchboard::ApiError> {
                let info = self.to_post_request_information(body, config)?;
                switchboard::RequestAdapter::send_no_content(self.base.adapter().as_ref(), info, $crate::builders::graph_errors()).await
            }

            pub fn to_post_request_information(
                &self,
                body: &$body,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<switchboard::RequestInformation, switchboard::ApiError> {
                let mut info = self.base.request_information(switchboard::RestMethod::Post, config);
                info.set_content_from_parsable(body)?;
                Ok(info)
            }
        }
    };
    ($(#[$meta:meta])* $name:ident => $template:literal, body: $body:ty, returns: $out:ty) => {
        request_builder! {
            $(#[$meta])*
            $name => $template
        }

        impl<A: switchboard::RequestAdapter> $name<A> {
            /// Invokes the action and returns the operation tracking it.
            pub async fn post(
                &self,
                body: &$body,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<Option<$out>, switchboard::ApiError> {
                let info = self.to_post_request_information(body, config)?;
                switchboard::RequestAdapter::send(self.base.adapter().as_ref(), info, $crate::builders::graph_errors()).await
            }

            pub fn to_post_request_information(
                &self,
                body: &$body,
                config: Option<&switchboard::RequestConfiguration<()>>,
            ) -> Result<switchboard::RequestInformation, switchboard::ApiError> {
                let mut info = self.base.request_information(switchboard::RestMethod::Post, config);
                info.set_content_from_parsable(body)?;
                Ok(info)
            }
        }
    };
}

mod call_actions;
mod call_records;
mod calls;
mod communications;
mod online_meetings;
mod operations;
mod participants;
mod presences;

pub use call_actions::*;
pub use call_records::*;
pub use calls::*;
pub use communications::*;
pub use online_meetings::*;
pub use operations::*;
pub use participants::*;
pub use presences::*;

query_parameters! {
    /// Query options accepted by collection GETs.
    pub struct CollectionQueryParameters {
        /// Include `@odata.count` in the response.
        count: bool => "%24count",
        expand: Vec<String> => "%24expand",
        filter: String => "%24filter",
        orderby: Vec<String> => "%24orderby",
        search: String => "%24search",
        select: Vec<String> => "%24select",
        skip: i32 => "%24skip",
        top: i32 => "%24top",
    }
}

query_parameters! {
    /// Query options accepted by item GETs.
    pub struct ItemQueryParameters {
        expand: Vec<String> => "%24expand",
        select: Vec<String> => "%24select",
    }
}

query_parameters! {
    /// Query options accepted by `$count` requests.
    pub struct CountQueryParameters {
        filter: String => "%24filter",
        search: String => "%24search",
    }
}

query_parameters! {
    /// Query options accepted by the call record log functions.
    pub struct LogFunctionQueryParameters {
        count: bool => "%24count",
        filter: String => "%24filter",
        search: String => "%24search",
        skip: i32 => "%24skip",
        top: i32 => "%24top",
    }
}

static GRAPH_ERRORS: LazyLock<ErrorMapping> = LazyLock::new(ODataError::mapping);

/// Error mapping applied to every Graph response.
pub(crate) fn graph_errors() -> &'static ErrorMapping {
    &GRAPH_ERRORS
}
