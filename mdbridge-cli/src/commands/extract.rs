//! Extract command: resolve a dot-separated key path in a JSON file.
//!
//! Built for CI pipelines that need one nested string (an application
//! identifier) out of a generated config. Traversal is all-or-nothing:
//! on success the resolved string is the only thing printed to stdout, on
//! any failure a diagnostic goes to stderr and the process exits non-zero.

use anyhow::{bail, Context, Result};
use std::path::Path;

use mdbridge_core::KeyPath;

pub fn run(file: &Path, key_path: &str) -> Result<()> {
    if !file.is_file() {
        bail!("JSON file not found: {}", file.display());
    }

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let doc: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let path = KeyPath::parse(key_path)?;
    let value = path.resolve(&doc)?;

    println!("{}", value);
    Ok(())
}
