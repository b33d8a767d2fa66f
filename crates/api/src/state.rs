use std::sync::Arc;

use infra::Db;

use crate::config::AppConfig;

/// Per-process state handed to every handler. Built once in `main`; the pool
/// is closed when the last clone drops at shutdown.
#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(db: Db, config: AppConfig) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
