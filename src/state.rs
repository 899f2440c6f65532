//! Application state shared across all request handlers.

use sea_orm::DatabaseConnection;

/// Shared application state, initialized once at startup and cloned cheaply
/// into each request handler via Axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Clones share the underlying pool. The pool is the only shared resource;
    /// all per-request services borrow it and hold no state of their own.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
