//! JSON decoding plumbing shared by generated models.

mod discriminator;
mod model;
mod union;

use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::store::BackingStore;

pub use discriminator::{discriminator_value, Constructor, DiscriminatorRegistry};
pub use model::{BackedModel, ODATA_TYPE_KEY};

/// A type the adapter can encode as a request body and decode from a response.
///
/// Implemented for every `Serialize + DeserializeOwned` type. Polymorphic
/// types satisfy it through a `Deserialize` impl that dispatches on their
/// discriminator (see [`discriminated_union!`](crate::discriminated_union)).
pub trait Parsable: Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> Parsable for T where T: Serialize + DeserializeOwned + Send + Sync + 'static {}

/// Writes the visible entries of a store as a JSON object, leaving out `skip` keys.
pub fn serialize_store<S: Serializer>(
    store: &BackingStore,
    skip: &[&str],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let entries: Vec<_> = store
        .enumerate()
        .filter(|(key, _)| !skip.contains(key))
        .collect();
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (key, value) in entries {
        map.serialize_entry(key, value)?;
    }
    map.end()
}
