//! Resource Manager request and response models.
//!
//! Field names follow the service's camelCase JSON. Polymorphic payloads
//! (configuration sources, job operation details) are enums that dispatch on
//! their discriminator property and keep unrecognized payloads as
//! `Unknown(Value)`.

/// Declares an enum over payloads discriminated by a string property.
///
/// Variant structs carry no discriminator field; it is added on
/// serialization and read through a [`switchboard::DiscriminatorRegistry`]
/// on deserialization.
macro_rules! polymorphic {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            tag: $tag:literal;
            $(
                $(#[$vmeta:meta])*
                $value:literal => $variant:ident($ty:ty)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($ty),
            )*
            /// A type this client does not know, kept verbatim.
            Unknown(::serde_json::Value),
        }

        impl $name {
            /// Discriminator property name.
            pub const DISCRIMINATOR: &'static str = $tag;

            fn registry() -> &'static ::switchboard::DiscriminatorRegistry<$name> {
                static REGISTRY: ::std::sync::LazyLock<::switchboard::DiscriminatorRegistry<$name>> =
                    ::std::sync::LazyLock::new(|| {
                        ::switchboard::DiscriminatorRegistry::new($tag, |node| Ok($name::Unknown(node)))
                        $(
                            .register($value, |node| ::serde_json::from_value(node).map($name::$variant))
                        )*
                    });
                &REGISTRY
            }

            /// Returns the discriminator value, if known.
            pub fn type_name(&self) -> ::std::option::Option<&str> {
                match self {
                    $(Self::$variant(_) => Some($value),)*
                    Self::Unknown(node) => ::switchboard::serialization::discriminator_value(node, $tag),
                }
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use ::serde::ser::Error as _;
                let (tag, inner) = match self {
                    $(Self::$variant(inner) => ($value, ::serde_json::to_value(inner).map_err(S::Error::custom)?),)*
                    Self::Unknown(node) => return ::serde::Serialize::serialize(node, serializer),
                };
                let mut node = inner;
                if let ::serde_json::Value::Object(map) = &mut node {
                    map.insert($tag.to_string(), ::serde_json::Value::String(tag.to_string()));
                }
                ::serde::Serialize::serialize(&node, serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let node = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::registry()
                    .create(node)
                    .map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

mod config_source;
mod enums;
mod job;
mod stack;
mod work_request;

use std::collections::BTreeMap;

pub use config_source::{
    CompartmentConfigSource, ConfigSource, CreateCompartmentConfigSourceDetails,
    CreateConfigSourceDetails, CreateGitConfigSourceDetails,
    CreateObjectStorageConfigSourceDetails, CreateZipUploadConfigSourceDetails,
    GitConfigSource, ObjectStorageConfigSource, UpdateConfigSourceDetails,
    UpdateGitConfigSourceDetails, UpdateObjectStorageConfigSourceDetails,
    UpdateZipUploadConfigSourceDetails, ZipUploadConfigSource,
};
pub use enums::{
    ExecutionPlanStrategy, FailureCode, JobLifecycleState, JobOperation, LogEntryLevel,
    LogEntryType, SortBy, SortOrder, StackLifecycleState, WorkRequestResourceActionType,
    WorkRequestStatus,
};
pub use job::{
    ApplyJobOperationDetails, ApplyJobPlanResolution, CreateApplyJobOperationDetails,
    CreateDestroyJobOperationDetails, CreateImportTfStateJobOperationDetails, CreateJobDetails,
    CreateJobOperationDetails, CreatePlanJobOperationDetails, DestroyJobOperationDetails,
    FailureDetails, ImportTfStateJobOperationDetails, Job, JobOperationDetails, JobSummary,
    LogEntry, PlanJobOperationDetails, UpdateJobDetails,
};
pub use stack::{ChangeStackCompartmentDetails, CreateStackDetails, Stack, StackSummary, UpdateStackDetails};
pub use work_request::{
    WorkRequest, WorkRequestError, WorkRequestLogEntry, WorkRequestResource, WorkRequestSummary,
};

/// Free-form tags: simple key/value pairs.
pub type FreeformTags = BTreeMap<String, String>;

/// Defined tags, keyed by namespace and then tag name.
pub type DefinedTags = BTreeMap<String, BTreeMap<String, serde_json::Value>>;
