//! HTTP methods used by request builders.

use strum::{Display, EnumIter, EnumString};

/// HTTP method of a request.
///
/// ## Examples
///
/// ```rust
/// use switchboard::RestMethod;
///
/// let method: RestMethod = "PATCH".parse().unwrap();
/// assert!(method.has_body());
/// assert_eq!(method.to_string(), "PATCH");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// Read a resource or collection.
    #[default]
    Get,
    /// Create a resource or invoke an action.
    Post,
    /// Replace a resource.
    Put,
    /// Update the changed properties of a resource.
    Patch,
    /// Remove a resource.
    Delete,
    /// Read headers only.
    Head,
    /// Query supported methods.
    Options,
}

impl RestMethod {
    /// Returns `true` if requests with this method normally carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Returns `true` if repeating the request has the same effect as sending it once.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, Self::Post | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
        }
    }
}
