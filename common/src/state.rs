//! Application state shared across axum route handlers.
//!
//! Holds the SeaORM database connection. Created once in `main` (or a test
//! harness) and cloned into the router; nothing here is mutated after
//! startup.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Shared reference to the database connection.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Cloned connection for contexts that need ownership.
    pub fn db_clone(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
