//! Constructor registry keyed by a discriminator value.

use serde_json::Value;

/// Builds a concrete value from a decoded JSON node.
pub type Constructor<T> = fn(Value) -> Result<T, serde_json::Error>;

/// Returns the string discriminator of a JSON object, if present.
pub fn discriminator_value<'a>(node: &'a Value, property: &str) -> Option<&'a str> {
    node.get(property).and_then(Value::as_str)
}

/// Maps discriminator values to constructors, with a fallback for unknown
/// or missing values.
///
/// ## Examples
///
/// ```rust
/// use serde_json::json;
/// use switchboard::DiscriminatorRegistry;
///
/// #[derive(Debug, PartialEq)]
/// enum Shape { Circle, Other }
///
/// let registry = DiscriminatorRegistry::new("kind", |_| Ok(Shape::Other))
///     .register("circle", |_| Ok(Shape::Circle));
///
/// assert_eq!(registry.create(json!({"kind": "circle"})).unwrap(), Shape::Circle);
/// assert_eq!(registry.create(json!({"kind": "hexagon"})).unwrap(), Shape::Other);
/// ```
pub struct DiscriminatorRegistry<T> {
    property: &'static str,
    entries: Vec<(&'static str, Constructor<T>)>,
    fallback: Constructor<T>,
}

impl<T> std::fmt::Debug for DiscriminatorRegistry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscriminatorRegistry")
            .field("property", &self.property)
            .field(
                "values",
                &self.entries.iter().map(|(v, _)| *v).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<T> DiscriminatorRegistry<T> {
    /// Creates a registry reading `property` and using `fallback` when no
    /// registered value matches.
    pub fn new(property: &'static str, fallback: Constructor<T>) -> Self {
        Self {
            property,
            entries: Vec::new(),
            fallback,
        }
    }

    /// Registers a constructor for a discriminator value.
    pub fn register(mut self, value: &'static str, constructor: Constructor<T>) -> Self {
        self.entries.push((value, constructor));
        self
    }

    /// Returns the discriminator property name.
    pub fn property(&self) -> &'static str {
        self.property
    }

    /// Returns `true` if a constructor is registered for `value`.
    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|(v, _)| *v == value)
    }

    /// Builds a value, dispatching on the node's discriminator.
    ///
    /// ## Errors
    ///
    /// Returns the selected constructor's decoding error.
    pub fn create(&self, node: Value) -> Result<T, serde_json::Error> {
        let constructor = discriminator_value(&node, self.property)
            .and_then(|tag| self.entries.iter().find(|(v, _)| *v == tag))
            .map_or(self.fallback, |(_, ctor)| *ctor);
        constructor(node)
    }
}
