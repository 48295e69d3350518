//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Cloned into every handler. The pool is opened once by [`crate::store::connect`] and lives
/// until the process closes it; for in-memory stores it holds the only connection to the data.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        AppState { pool }
    }
}
