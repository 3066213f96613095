//! Status code to error payload mapping.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;

use crate::error::{MappedError, ValidationError};

/// Decodes an error response body into a boxed error.
pub type ErrorFactory = fn(&[u8]) -> Result<MappedError, ValidationError>;

/// Decodes an error body as JSON of type `E`.
///
/// Used as an [`ErrorFactory`]: `parse_error::<ODataError>`.
pub fn parse_error<E>(body: &[u8]) -> Result<MappedError, ValidationError>
where
    E: DeserializeOwned + std::error::Error + Send + Sync + 'static,
{
    let error: E = serde_json::from_slice(body)?;
    Ok(Box::new(error))
}

/// Error factories keyed by status pattern.
///
/// Keys are exact codes (`"404"`), classes (`"4XX"`, `"5XX"`) or the
/// catch-all `"XXX"`. Lookup tries them in that order.
///
/// ## Examples
///
/// ```rust
/// use switchboard::{parse_error, ErrorMapping};
///
/// #[derive(Debug, serde::Deserialize, thiserror::Error)]
/// #[error("{message}")]
/// struct Problem { message: String }
///
/// let mapping = ErrorMapping::new().with("XXX", parse_error::<Problem>);
/// assert!(mapping.resolve(404).is_some());
/// assert!(mapping.resolve(503).is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ErrorMapping {
    entries: BTreeMap<String, ErrorFactory>,
}

impl ErrorMapping {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory for a status pattern.
    pub fn with(mut self, pattern: &str, factory: ErrorFactory) -> Self {
        self.entries.insert(pattern.to_ascii_uppercase(), factory);
        self
    }

    /// Finds the factory for a status code.
    pub fn resolve(&self, status: u16) -> Option<ErrorFactory> {
        let class = match status {
            400..=499 => Some("4XX"),
            500..=599 => Some("5XX"),
            _ => None,
        };
        self.entries
            .get(&status.to_string())
            .or_else(|| class.and_then(|c| self.entries.get(c)))
            .or_else(|| self.entries.get("XXX"))
            .copied()
    }

    /// Returns `true` if no factory is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
