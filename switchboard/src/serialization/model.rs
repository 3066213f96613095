//! Backing-store models and the `backed_model!` declaration macro.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::StoreError;
use crate::store::BackingStore;

/// Wire name of the OData type annotation.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

/// A model whose properties live in a [`BackingStore`].
///
/// Implemented by [`backed_model!`] types and by the unions declared with
/// [`discriminated_union!`](crate::discriminated_union), which delegate to
/// their active variant.
pub trait BackedModel {
    /// Returns the store.
    fn backing_store(&self) -> &BackingStore;

    /// Returns the store mutably.
    fn backing_store_mut(&mut self) -> &mut BackingStore;

    /// Returns the wire names of the declared properties.
    fn properties(&self) -> &'static [&'static str];

    /// Returns the OData type annotation.
    fn odata_type(&self) -> Result<Option<String>, StoreError> {
        self.backing_store().get(ODATA_TYPE_KEY)
    }

    /// Sets the OData type annotation.
    fn set_odata_type(&mut self, value: Option<String>) -> Result<(), StoreError> {
        self.backing_store_mut().set(ODATA_TYPE_KEY, value)
    }

    /// Returns every stored property that is not declared on the model.
    fn additional_data(&self) -> BTreeMap<String, Value> {
        let declared = self.properties();
        self.backing_store()
            .enumerate()
            .filter(|(key, _)| *key != ODATA_TYPE_KEY && !declared.contains(key))
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    /// Stores an undeclared property.
    fn set_additional_data(&mut self, key: &str, value: Value) {
        self.backing_store_mut().set_raw(key, value);
    }

    /// Makes serialization emit only the properties changed since the model
    /// was loaded.
    fn send_only_changes(&mut self) {
        self.backing_store_mut().set_return_only_changed_values(true);
    }
}

/// Declares a backing-store model.
///
/// Each property line is `getter, setter: Type => "wireName";`. Properties in
/// the optional `read_only` block get accessors too but are never serialized.
/// The `odata_type` line is optional; request bodies usually omit it.
///
/// ## Examples
///
/// ```rust
/// use switchboard::{backed_model, BackedModel};
///
/// backed_model! {
///     /// A conference room.
///     pub struct Room {
///         odata_type: "#example.room";
///         properties {
///             /// Display name.
///             name, set_name: String => "displayName";
///             capacity, set_capacity: i32 => "capacity";
///         }
///         read_only {
///             building, set_building: String => "building";
///         }
///     }
/// }
///
/// let mut room = Room::new();
/// room.set_name(Some("Orca".to_string())).unwrap();
/// room.set_building(Some("B1".to_string())).unwrap();
///
/// let json = serde_json::to_value(&room).unwrap();
/// assert_eq!(json["displayName"], "Orca");
/// assert!(json.get("building").is_none());
/// ```
#[macro_export]
macro_rules! backed_model {
    (@odata_type) => {
        ::std::option::Option::None
    };
    (@odata_type $odata:literal) => {
        ::std::option::Option::Some($odata)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(odata_type: $odata:literal;)?
            properties {
                $(
                    $(#[$pmeta:meta])*
                    $get:ident, $set:ident : $ty:ty => $key:literal;
                )*
            }
            $(
                read_only {
                    $(
                        $(#[$rmeta:meta])*
                        $rget:ident, $rset:ident : $rty:ty => $rkey:literal;
                    )*
                }
            )?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        $vis struct $name {
            store: $crate::BackingStore,
        }

        impl $name {
            /// OData type annotation written by [`Self::new`].
            pub const ODATA_TYPE: ::std::option::Option<&'static str> =
                $crate::backed_model!(@odata_type $($odata)?);

            /// Wire names of every declared property.
            pub const PROPERTIES: &'static [&'static str] = &[$($key,)* $($($rkey,)*)?];

            /// Wire names excluded from serialization.
            pub const READ_ONLY: &'static [&'static str] = &[$($($rkey,)*)?];

            /// Creates an empty model carrying its OData type, if it has one.
            pub fn new() -> Self {
                let mut store = $crate::BackingStore::new();
                if let ::std::option::Option::Some(odata_type) = Self::ODATA_TYPE {
                    store.set_raw(
                        $crate::serialization::ODATA_TYPE_KEY,
                        $crate::__private::serde_json::Value::String(odata_type.to_string()),
                    );
                }
                Self { store }
            }

            $(
                $(#[$pmeta])*
                pub fn $get(&self) -> ::std::result::Result<::std::option::Option<$ty>, $crate::StoreError> {
                    self.store.get($key)
                }

                #[doc = concat!("Sets `", $key, "`.")]
                pub fn $set(&mut self, value: ::std::option::Option<$ty>) -> ::std::result::Result<(), $crate::StoreError> {
                    self.store.set($key, value)
                }
            )*

            $($(
                $(#[$rmeta])*
                pub fn $rget(&self) -> ::std::result::Result<::std::option::Option<$rty>, $crate::StoreError> {
                    self.store.get($rkey)
                }

                #[doc = concat!("Sets read-only `", $rkey, "` locally; it is not sent to the service.")]
                pub fn $rset(&mut self, value: ::std::option::Option<$rty>) -> ::std::result::Result<(), $crate::StoreError> {
                    self.store.set($rkey, value)
                }
            )*)?
        }

        impl $crate::BackedModel for $name {
            fn backing_store(&self) -> &$crate::BackingStore {
                &self.store
            }

            fn backing_store_mut(&mut self) -> &mut $crate::BackingStore {
                &mut self.store
            }

            fn properties(&self) -> &'static [&'static str] {
                Self::PROPERTIES
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::serialization::serialize_store(&self.store, Self::READ_ONLY, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let values = <::std::collections::BTreeMap<
                    ::std::string::String,
                    $crate::__private::serde_json::Value,
                > as $crate::__private::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self {
                    store: $crate::BackingStore::from_values(values),
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    crate::backed_model! {
        struct Body {
            properties {
                reason, set_reason: String => "reason";
            }
        }
    }

    #[test]
    fn test_body_without_odata_type() {
        let mut body = Body::new();
        body.set_reason(Some("busy".to_string())).unwrap();
        assert_eq!(Body::ODATA_TYPE, None);
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"reason": "busy"}));
    }

    crate::backed_model! {
        /// Test call.
        pub struct TestCall {
            odata_type: "#microsoft.graph.call";
            properties {
                /// Subject.
                subject, set_subject: String => "subject";
                tenant_id, set_tenant_id: String => "tenantId";
                modalities, set_modalities: Vec<String> => "requestedModalities";
            }
            read_only {
                state, set_state: String => "state";
            }
        }
    }

    #[test]
    fn test_new_carries_odata_type() {
        let call = TestCall::new();
        assert_eq!(
            call.odata_type().unwrap().as_deref(),
            Some("#microsoft.graph.call")
        );
        assert_eq!(TestCall::PROPERTIES.len(), 4);
    }

    #[test]
    fn test_round_trip_drops_only_read_only_fields() {
        let mut call = TestCall::new();
        call.set_subject(Some("triage".to_string())).unwrap();
        call.set_modalities(Some(vec!["audio".to_string()])).unwrap();
        call.set_state(Some("established".to_string())).unwrap();
        call.set_additional_data("customProperty", json!({"a": 1}));

        let json = serde_json::to_value(&call).unwrap();
        let back: TestCall = serde_json::from_value(json).unwrap();

        assert_eq!(back.subject().unwrap(), call.subject().unwrap());
        assert_eq!(back.modalities().unwrap(), call.modalities().unwrap());
        assert_eq!(back.state().unwrap(), None);
        assert_eq!(back.additional_data()["customProperty"], json!({"a": 1}));
    }

    #[test]
    fn test_decoded_model_sends_only_changes() {
        let mut call: TestCall = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.call",
            "subject": "old",
            "tenantId": "t1",
            "state": "established"
        }))
        .unwrap();

        call.set_subject(Some("new".to_string())).unwrap();
        call.send_only_changes();

        assert_eq!(serde_json::to_value(&call).unwrap(), json!({"subject": "new"}));
    }

    #[test]
    fn test_wrong_type_is_store_error() {
        let call: TestCall = serde_json::from_value(json!({"subject": 42})).unwrap();
        assert!(call.subject().is_err());
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert!(serde_json::from_value::<TestCall>(json!([1, 2])).is_err());
    }
}
