//! mdbridge core library.
//!
//! Shared building blocks for the mdbridge tools:
//!
//! - **Key-path traversal**: resolve dot-separated paths (`client.app.id`)
//!   through nested JSON documents
//! - **Markdown rendering**: GitHub-flavored conversion with highlighted
//!   fenced code, tables, and hard line breaks, wrapped in a full HTML page
//! - **Snapshot persistence**: the single on-disk Markdown blob the bridge
//!   server overwrites on every submission

pub mod error;
pub mod keypath;
pub mod render;
pub mod snapshot;

pub use error::{KeyPathError, SnapshotError};
pub use keypath::KeyPath;
pub use render::{RenderOptions, Renderer};
pub use snapshot::SnapshotStore;
