//! Keyed panel width persistence
//!
//! A JSON object of `storage_key -> width`, written atomically.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ListkitError, Result};

#[derive(Debug, Clone)]
pub struct WidthStore {
    path: PathBuf,
    widths: BTreeMap<String, u32>,
}

impl WidthStore {
    /// Load the store at `path`; a missing file is an empty store
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let widths = if path.exists() {
            let content = fs::read_to_string(&path)?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .map_err(|e| ListkitError::json(path.display().to_string(), e))?
            }
        } else {
            debug!(path = %path.display(), "width store not found, starting empty");
            BTreeMap::new()
        };

        Ok(Self { path, widths })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<u32> {
        self.widths.get(key).copied()
    }

    pub fn set(&mut self, key: impl Into<String>, width: u32) {
        self.widths.insert(key.into(), width);
    }

    pub fn remove(&mut self, key: &str) -> Option<u32> {
        self.widths.remove(key)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> {
        self.widths.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Write the store through a temp file in the same directory
    pub fn save(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let json = serde_json::to_string_pretty(&self.widths)
            .map_err(|e| ListkitError::json("serializing width store", e))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        info!(path = %self.path.display(), entries = self.widths.len(), "saved panel widths");
        Ok(())
    }
}
