//! JSON-file backed key-value store.
//!
//! All keys live in one JSON object on disk. Each write rewrites the whole file
//! through a sibling temp file and a rename, so a crash never leaves half a document.

use crate::error::{Result, RquoteError};
use crate::store::KeyValueStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "rquote";
const STORE_FILE: &str = "storage.json";

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `{data_dir}/rquote/storage.json`, falling back to the working directory
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(STORE_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(err) => {
                return Err(RquoteError::file_error(
                    format!("failed to read {}", self.path.display()),
                    err,
                ));
            }
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        Ok(Self::decode_entries(&contents).unwrap_or_else(|reason| {
            log::warn!(
                "{} is not a valid store ({}); starting empty",
                self.path.display(),
                reason
            );
            BTreeMap::new()
        }))
    }

    /// Values that are not strings (a hand-edited list, say) are kept as their JSON
    /// text, which is the form every value is written in.
    fn decode_entries(contents: &str) -> std::result::Result<BTreeMap<String, String>, String> {
        match serde_json::from_str::<serde_json::Value>(contents) {
            Ok(serde_json::Value::Object(map)) => Ok(map
                .into_iter()
                .map(|(key, value)| match value {
                    serde_json::Value::String(text) => (key, text),
                    other => (key, other.to_string()),
                })
                .collect()),
            Ok(_) => Err("top level is not an object".to_string()),
            Err(err) => Err(err.to_string()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    RquoteError::file_error(format!("failed to create {}", parent.display()), e)
                })?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| {
            RquoteError::file_error(format!("failed to write {}", tmp_path.display()), e)
        })?;
        fs::rename(&tmp_path, &self.path).map_err(|e| {
            RquoteError::file_error(format!("failed to replace {}", self.path.display()), e)
        })?;
        Ok(())
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }
}
