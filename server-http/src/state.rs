use crate::db::SquadDb;
use cache_store::CacheStore;
use std::sync::Arc;

/// Server state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SquadDb>,
    pub cache: Arc<dyn CacheStore>,
}

impl AppState {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self {
            db: Arc::new(SquadDb::new()),
            cache,
        }
    }
}
