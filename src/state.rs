use sqlx::PgPool;

use crate::database::DatabaseManager;

/// Shared handler state. Cloning is cheap: the pool is reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: DatabaseManager,
}

impl AppState {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    pub fn pool(&self) -> &PgPool {
        self.db.pool()
    }
}
