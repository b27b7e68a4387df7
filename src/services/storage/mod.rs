//! Storage port for persisted calendar state.
//!
//! The store treats persistence as an opaque key-value blob: one serialized
//! string per key. The port is injected into the store so hosts can swap the
//! medium (file on disk, browser storage bridge, test memory) without the
//! store knowing.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed key the calendar state blob lives under.
pub const STORAGE_KEY: &str = "resource-calendar-state";

/// Synchronous key-value blob store.
pub trait StoragePort {
    /// Read the blob stored under `key`, `None` when absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `blob` under `key`, replacing any previous value. The write
    /// must be complete when this returns so in-memory state and stored
    /// state never observably diverge within one interaction cycle.
    fn store(&mut self, key: &str, blob: &str) -> Result<()>;
}

/// In-process storage for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn store(&mut self, key: &str, blob: &str) -> Result<()> {
        self.entries.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key under a root directory.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Storage rooted at an explicit directory (created on first write).
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Storage rooted in the platform data directory.
    pub fn in_data_dir() -> Result<Self> {
        let root = directories::BaseDirs::new()
            .context("Failed to get base directories")?
            .data_dir()
            .join("resource-calendar");
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StoragePort for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let blob =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
        Ok(Some(blob))
    }

    fn store(&mut self, key: &str, blob: &str) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)
                .with_context(|| format!("Failed to create storage directory {:?}", self.root))?;
        }
        let path = self.path_for(key);
        fs::write(&path, blob).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(())
    }
}
