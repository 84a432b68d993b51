use std::sync::Arc;
use crate::db::Database;

/// Shared by every handler. The database handle is read-only, so no locking.
#[derive(Clone)]
pub struct AppState {
    db: Arc<dyn Database>,
}

impl AppState {
    pub fn new<D: Database + 'static>(db: D) -> Self {
        Self { db: Arc::new(db) }
    }

    pub fn db(&self) -> &dyn Database {
        self.db.as_ref()
    }
}
