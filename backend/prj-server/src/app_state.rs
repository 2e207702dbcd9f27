use prj_config::ApiConfig;
use prj_core::{ProjectService, ProjectStore};
use prj_db::ProjectRepository;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    /// Kept for health probes
    pub pool: SqlitePool,
    pub projects: ProjectService,
    pub api_config: ApiConfig,
}

impl AppState {
    /// Projects backed by the SQLite repository on `pool`.
    pub fn new(pool: SqlitePool, api_config: ApiConfig) -> Self {
        let store = Arc::new(ProjectRepository::new(pool.clone()));
        Self::with_store(pool, store, api_config)
    }

    pub fn with_store(
        pool: SqlitePool,
        store: Arc<dyn ProjectStore>,
        api_config: ApiConfig,
    ) -> Self {
        Self {
            pool,
            projects: ProjectService::new(store),
            api_config,
        }
    }
}
