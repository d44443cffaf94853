//! Persistent key-value store
//!
//! Values are JSON documents addressed by string key. The repositories keep
//! two keys here: `vehicles` and `events`.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use masinica_types::{Result, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;

/// Synchronous, immediately consistent key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Write several keys as one update. Either every entry is applied or,
    /// on error, none is.
    fn set_many(&self, entries: Vec<(String, Value)>) -> Result<()>;

    /// Delete a key. Missing keys are ignored.
    fn remove(&self, key: &str) -> Result<()>;

    fn set(&self, key: &str, value: Value) -> Result<()> {
        self.set_many(vec![(key.to_string(), value)])
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        (**self).get(key)
    }

    fn set_many(&self, entries: Vec<(String, Value)>) -> Result<()> {
        (**self).set_many(entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Typed access on top of raw JSON values
pub trait KeyValueStoreExt: KeyValueStore {
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key)? {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| StoreError::Corrupted(format!("key \"{}\": {}", key, e)).into()),
            None => Ok(None),
        }
    }

    fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.set(key, serde_json::to_value(value)?)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_json_missing_key() {
        let store = MemoryStore::new();
        let value: Option<Vec<String>> = store.get_json("vehicles").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_typed_round_trip_through_rc() {
        let store = Rc::new(MemoryStore::new());
        store
            .set_json("vehicles", &vec!["B123ABC".to_string(), "CJ45XYZ".to_string()])
            .unwrap();
        let plates: Vec<String> = store.get_json("vehicles").unwrap().unwrap();
        assert_eq!(plates, vec!["B123ABC", "CJ45XYZ"]);
    }

    #[test]
    fn test_get_json_wrong_shape_is_corrupted() {
        let store = MemoryStore::new();
        store.set("vehicles", serde_json::json!({"not": "a list"})).unwrap();
        let err = store.get_json::<Vec<String>>("vehicles").unwrap_err();
        assert!(matches!(
            err,
            masinica_types::Error::Store(StoreError::Corrupted(_))
        ));
    }
}
