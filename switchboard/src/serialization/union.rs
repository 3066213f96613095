//! The `discriminated_union!` declaration macro.

/// Declares a sum type over a base model and its subtypes.
///
/// Decoding reads the discriminator property and dispatches through a
/// [`DiscriminatorRegistry`](crate::DiscriminatorRegistry); missing or
/// unknown values decode as the base variant. The union implements
/// [`BackedModel`](crate::BackedModel) by delegating to the active variant.
///
/// ## Examples
///
/// ```rust
/// use switchboard::{backed_model, discriminated_union};
///
/// backed_model! {
///     pub struct Shape {
///         odata_type: "#example.shape";
///         properties {}
///     }
/// }
///
/// backed_model! {
///     pub struct Circle {
///         odata_type: "#example.circle";
///         properties {
///             radius, set_radius: f64 => "radius";
///         }
///     }
/// }
///
/// discriminated_union! {
///     pub enum AnyShape {
///         property: "@odata.type";
///         base: Shape(Shape);
///         variants {
///             "#example.circle" => Circle(Circle),
///         }
///     }
/// }
///
/// let shape: AnyShape =
///     serde_json::from_str(r##"{"@odata.type":"#example.circle","radius":2.0}"##).unwrap();
/// assert!(matches!(shape, AnyShape::Circle(ref c) if c.radius().unwrap() == Some(2.0)));
/// ```
#[macro_export]
macro_rules! discriminated_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            property: $property:literal;
            base: $base_variant:ident($base:ty);
            variants {
                $(
                    $value:literal => $variant:ident($ty:ty)
                ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            /// The base type, used for unknown or missing discriminators.
            $base_variant($base),
            $(
                #[doc = concat!("Decoded from `", $value, "`.")]
                $variant($ty),
            )*
        }

        impl $name {
            /// Discriminator property name.
            pub const DISCRIMINATOR: &'static str = $property;

            /// Returns the constructor registry for this union.
            pub fn registry() -> &'static $crate::DiscriminatorRegistry<$name> {
                static REGISTRY: ::std::sync::LazyLock<$crate::DiscriminatorRegistry<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        $crate::DiscriminatorRegistry::new($property, |node| {
                            $crate::__private::serde_json::from_value(node).map($name::$base_variant)
                        })
                        $(
                            .register($value, |node| {
                                $crate::__private::serde_json::from_value(node).map($name::$variant)
                            })
                        )*
                    });
                &REGISTRY
            }

            /// Builds the concrete variant selected by the node's discriminator.
            ///
            /// ## Errors
            ///
            /// Returns the decoding error of the selected variant.
            pub fn create_from_discriminator_value(
                node: $crate::__private::serde_json::Value,
            ) -> ::std::result::Result<Self, $crate::__private::serde_json::Error> {
                Self::registry().create(node)
            }
        }

        impl From<$base> for $name {
            fn from(value: $base) -> Self {
                Self::$base_variant(value)
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*

        impl $crate::BackedModel for $name {
            fn backing_store(&self) -> &$crate::BackingStore {
                match self {
                    Self::$base_variant(inner) => $crate::BackedModel::backing_store(inner),
                    $(Self::$variant(inner) => $crate::BackedModel::backing_store(inner),)*
                }
            }

            fn backing_store_mut(&mut self) -> &mut $crate::BackingStore {
                match self {
                    Self::$base_variant(inner) => $crate::BackedModel::backing_store_mut(inner),
                    $(Self::$variant(inner) => $crate::BackedModel::backing_store_mut(inner),)*
                }
            }

            fn properties(&self) -> &'static [&'static str] {
                match self {
                    Self::$base_variant(inner) => $crate::BackedModel::properties(inner),
                    $(Self::$variant(inner) => $crate::BackedModel::properties(inner),)*
                }
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                match self {
                    Self::$base_variant(inner) => $crate::__private::serde::Serialize::serialize(inner, serializer),
                    $(Self::$variant(inner) => $crate::__private::serde::Serialize::serialize(inner, serializer),)*
                }
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let node = <$crate::__private::serde_json::Value as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Self::create_from_discriminator_value(node)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
