//! File-backed store: every key lives in one JSON document on disk

use crate::KeyValueStore;
use masinica_types::{Error, Result, StoreError};
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const STORE_FILE: &str = "storage.json";

/// JSON document store in the application data directory
///
/// The document is rewritten through a temporary file and a rename, and the
/// cached copy is only replaced once that write has succeeded.
pub struct FileStore {
    store_path: PathBuf,
    entries: RefCell<Map<String, Value>>,
}

impl FileStore {
    /// Create or load a store in `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir).map_err(|e| io_error(&store_dir, e))?;
        let store_path = store_dir.join(STORE_FILE);

        let entries = if store_path.exists() {
            let file = File::open(&store_path).map_err(|e| io_error(&store_path, e))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| {
                StoreError::Corrupted(format!("{}: {}", store_path.display(), e))
            })?
        } else {
            Map::new()
        };

        tracing::debug!(path = %store_path.display(), keys = entries.len(), "Store opened");

        Ok(Self {
            store_path,
            entries: RefCell::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    fn persist(&self, entries: &Map<String, Value>) -> Result<()> {
        let tmp_path = self.store_path.with_extension("json.tmp");

        let file = File::create(&tmp_path).map_err(|e| io_error(&tmp_path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush().map_err(|e| io_error(&tmp_path, e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| io_error(&tmp_path, e))?;
        drop(writer);

        fs::rename(&tmp_path, &self.store_path).map_err(|e| {
            let _ = fs::remove_file(&tmp_path);
            io_error(&self.store_path, e)
        })?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_many(&self, entries: Vec<(String, Value)>) -> Result<()> {
        let mut next = self.entries.borrow().clone();
        let keys: Vec<String> = entries.iter().map(|(k, _)| k.clone()).collect();
        for (key, value) in entries {
            next.insert(key, value);
        }

        if let Err(e) = self.persist(&next) {
            tracing::warn!(error = %e, ?keys, "Store write failed, keeping previous state");
            return Err(e);
        }

        *self.entries.borrow_mut() = next;
        tracing::debug!(?keys, "Store written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.entries.borrow().contains_key(key) {
            return Ok(());
        }
        let mut next = self.entries.borrow().clone();
        next.remove(key);
        self.persist(&next)?;
        *self.entries.borrow_mut() = next;
        Ok(())
    }
}

fn io_error(path: &Path, err: std::io::Error) -> Error {
    StoreError::Io(format!("{}: {}", path.display(), err)).into()
}
