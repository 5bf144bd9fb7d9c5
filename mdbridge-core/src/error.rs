//! Error types for mdbridge-core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving a key path through a JSON document.
#[derive(Error, Debug, PartialEq)]
pub enum KeyPathError {
    /// The dotted path string was empty or contained an empty segment.
    #[error("Key path is empty or contains an empty segment")]
    Empty,

    /// A traversal step found no mapping entry for the next key.
    #[error("Failed to traverse path '{path}'. Missing key: '{key}'")]
    MissingKey {
        /// The key that was not present.
        key: String,
        /// The full dotted path being resolved.
        path: String,
    },

    /// An intermediate value was not a JSON object, so traversal cannot continue.
    #[error("Cannot traverse into key '{key}' of path '{path}': value is not an object")]
    NotAnObject {
        /// The key whose value blocked traversal.
        key: String,
        /// The full dotted path being resolved.
        path: String,
    },

    /// The final resolved value was not a string.
    #[error("Value at path '{path}' is not a string: {found}")]
    NotAString {
        /// The full dotted path being resolved.
        path: String,
        /// Description of the JSON type actually found.
        found: String,
    },
}

/// Errors that can occur reading or writing the snapshot file.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The snapshot file exists but could not be read.
    #[error("Failed to read snapshot {path}: {source}")]
    Read {
        /// Path of the snapshot file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The snapshot file could not be written.
    #[error("Failed to write snapshot {path}: {source}")]
    Write {
        /// Path of the snapshot file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}
