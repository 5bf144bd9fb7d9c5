//! Shared application state for the bridge server.

use tokio::sync::RwLock;

use mdbridge_core::{Renderer, SnapshotStore};

/// Shared server context passed to every request handler.
///
/// The rendered cache starts empty at process start, is lazily populated on
/// the first fetch, and is replaced on every submit. The write guard on
/// `cache` doubles as the critical section around the snapshot-file
/// read-modify-write: a submit holds it across the save and the cache swap,
/// so two near-simultaneous submissions are serialized (last writer wins).
pub struct AppState {
    /// The on-disk snapshot, overwritten on each submission.
    pub store: SnapshotStore,
    /// Markdown to HTML conversion.
    pub renderer: Renderer,
    /// The rendered HTML document, or `None` before first fetch/submit.
    pub cache: RwLock<Option<String>>,
}

impl AppState {
    /// Create state with an empty cache.
    pub fn new(store: SnapshotStore, renderer: Renderer) -> Self {
        Self {
            store,
            renderer,
            cache: RwLock::new(None),
        }
    }
}
