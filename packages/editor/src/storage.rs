//! Persistence hook for config text.
//!
//! The store never touches the filesystem directly. It hands text to a
//! [`ConfigStorage`], which makes the in-memory variant a drop-in for tests.

use crate::EditorError;
use std::path::{Path, PathBuf};

/// Where the config text lives between sessions
pub trait ConfigStorage {
    /// Stored text, or `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<String>, EditorError>;

    fn save(&mut self, contents: &str) -> Result<(), EditorError>;

    /// Human-readable location, used in logs
    fn location(&self) -> String;
}

/// Config file on disk
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, EditorError> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&self.path)?))
    }

    fn save(&mut self, contents: &str) -> Result<(), EditorError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory storage for testing
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ConfigStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, EditorError> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, contents: &str) -> Result<(), EditorError> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
