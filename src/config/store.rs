//! Key-value persistence for small pieces of user state.
//!
//! The production store keeps one JSON object per application under
//! `<config root>/configstore/<app-name>.json`, re-reading the file on every access
//! so that edits made outside the program are picked up.

use crate::error::Result;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Key recording that first-time setup has been completed.
pub const IS_SET_UP: &str = "isSetUp";

/// A persistent key-value store of JSON values.
pub trait ConfigStore {
    /// Returns the value stored under `key`, or `None` if it was never set.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    fn delete(&mut self, key: &str) -> Result<()>;

    /// Reads `key` as a flag. Absent and non-boolean values count as `false`.
    fn get_bool(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.and_then(|v| v.as_bool()).unwrap_or(false))
    }
}

/// `ConfigStore` backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for `app_name` rooted at the user's config directory.
    pub fn for_app(config_root: &Path, app_name: &str) -> Self {
        Self::new(
            config_root
                .join("configstore")
                .join(format!("{}.json", app_name)),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Config file {} does not exist yet", self.path.display());
                return Ok(Map::new());
            },
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => {
                warn!(
                    "Config file {} holds a {} instead of an object; treating it as empty",
                    self.path.display(),
                    json_kind(&other)
                );
                Ok(Map::new())
            },
            Err(e) => {
                warn!(
                    "Config file {} is not valid JSON ({}); treating it as empty",
                    self.path.display(),
                    e
                );
                Ok(Map::new())
            },
        }
    }

    fn save(&self, map: Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Value::Object(map))?;
        fs::write(&self.path, json)?;
        debug!("Wrote config file {}", self.path.display());
        Ok(())
    }
}

impl ConfigStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut map = self.load()?;
        map.insert(key.to_string(), value);
        self.save(map)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let mut map = self.load()?;
        if map.remove(key).is_some() {
            self.save(map)?;
        }
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// In-process `ConfigStore`; nothing survives the process.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: std::collections::HashMap<String, Value>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}
