//! Persistence for the single Markdown snapshot.
//!
//! The bridge keeps exactly one piece of content: a flat text file that is
//! overwritten in full on every accepted submission. There is no versioning
//! and no structured format, only the latest blob.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SnapshotError;

/// Handle to the on-disk snapshot file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store backed by the given file path. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the snapshot with new content. Unconditional; the previous
    /// content is lost.
    pub fn save(&self, text: &str) -> Result<(), SnapshotError> {
        fs::write(&self.path, text).map_err(|source| SnapshotError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = text.len(), "snapshot saved");
        Ok(())
    }

    /// Read the current snapshot, or `Ok(None)` when no file exists yet.
    pub fn load(&self) -> Result<Option<String>, SnapshotError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SnapshotError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Whether a snapshot file currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}
