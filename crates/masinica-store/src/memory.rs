//! In-memory store for tests and previews

use crate::KeyValueStore;
use masinica_types::{Result, StoreError};
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Volatile store. Writes can be switched to fail to exercise error paths.
#[derive(Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, Value>>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail with `StoreError::Unavailable`
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.get() {
            return Err(StoreError::Unavailable("writes disabled".to_string()).into());
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_many(&self, entries: Vec<(String, Value)>) -> Result<()> {
        self.check_writable()?;
        self.entries.borrow_mut().extend(entries);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failing_writes_leave_entries_untouched() {
        let store = MemoryStore::new();
        store.set("vehicles", json!(["X"])).unwrap();

        store.set_fail_writes(true);
        assert!(store.set("vehicles", json!([])).is_err());
        assert!(store.remove("vehicles").is_err());
        assert_eq!(store.get("vehicles").unwrap(), Some(json!(["X"])));

        store.set_fail_writes(false);
        store.set("vehicles", json!([])).unwrap();
        assert_eq!(store.get("vehicles").unwrap(), Some(json!([])));
    }
}
