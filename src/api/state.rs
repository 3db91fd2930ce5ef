//! Application state for the API server.

use std::sync::Arc;

use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so any backend can be used; the dependency is
/// injected via the constructor rather than reached through process-wide
/// state.
pub struct AppState<D: Database> {
    db: Arc<D>,
}

// Manual Clone impl - we only need the Arc to be cloneable, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create state around an already-shared database handle.
    ///
    /// The caller keeps its own handle, so it can release the store client
    /// once the listener has drained.
    pub fn new(db: Arc<D>) -> Self {
        Self { db }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }
}
