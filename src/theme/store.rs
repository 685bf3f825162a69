use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("Preference storage unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Preference file is not a JSON object: {0}")]
    Format(String),
}

/// Client-local key/value storage for operator preferences.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Preferences kept in a small JSON object on disk.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, PreferenceError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let text = std::fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(PreferenceError::Format(format!("found {}", other))),
            Err(e) => Err(PreferenceError::Format(e.to_string())),
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let map = self.read_map()?;
        Ok(map.get(key).and_then(|v| v.as_str()).map(|s| s.to_string()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // a corrupt file gets replaced; an unreadable one is left alone
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(PreferenceError::Format(reason)) => {
                tracing::warn!(path = %self.path.display(), %reason, "Replacing malformed preference file");
                Map::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), Value::String(value.to_string()));
        let text = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| PreferenceError::Format(e.to_string()))?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Non-persistent store, for tests and `--no-persist-theme` runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
