use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ForgeError;

/// Durable key/value store holding the last value of each document field.
pub trait PersistenceCache {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ForgeError>;

    /// Writes several entries in one go.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<(), ForgeError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ForgeError>;
    fn is_empty(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: BTreeMap<String, String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PersistenceCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ForgeError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ForgeError> {
        self.entries.clear();
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// JSON file mirror of the field values, rewritten on every write.
///
/// The in-memory map only changes after the file write succeeded.
#[derive(Debug)]
pub struct JsonFileCache {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileCache {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ForgeError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            match serde_json::from_str::<BTreeMap<String, String>>(&content) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!("Ignoring unreadable field cache at {:?}: {}", path, e);
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened field cache at {:?} ({} entries)", path, entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, entries: &BTreeMap<String, String>) -> Result<(), ForgeError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl PersistenceCache for JsonFileCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ForgeError> {
        self.set_many(&[(key, value)])
    }

    fn set_many(&mut self, entries: &[(&str, &str)]) -> Result<(), ForgeError> {
        let mut next = self.entries.clone();
        for (key, value) in entries {
            next.insert(key.to_string(), value.to_string());
        }
        self.write_file(&next)?;
        self.entries = next;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ForgeError> {
        self.entries.clear();
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
