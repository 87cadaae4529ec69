use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a record within its store.
pub type RecordId = i64;

/// Sentinel ID asking the store to assign the next free identifier.
pub const UNASSIGNED_ID: RecordId = 0;

/// A keyed entity that can live in a record store.
///
/// Stores never inspect record contents beyond the ID, so any plain value
/// type with a settable integer key can be stored.
pub trait Record: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Singular name used in log lines and error messages.
    const KIND: &'static str;

    /// Path segment the record kind is served under.
    const COLLECTION: &'static str;

    fn id(&self) -> RecordId;

    fn set_id(&mut self, id: RecordId);

    fn is_unassigned(&self) -> bool {
        self.id() == UNASSIGNED_ID
    }
}

/// Decodes an explicit `null` as the field's zero value, the same as an
/// absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
