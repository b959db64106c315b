use std::sync::Arc;

use crate::calculate::{CompareOptions, ObjectiveRegistry};
use crate::catalog::Catalog;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub registry: Arc<ObjectiveRegistry>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(catalog: Catalog, config: AppConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            registry: Arc::new(config.scoring.registry()),
            config: Arc::new(config),
        }
    }

    pub fn compare_options(&self) -> CompareOptions {
        self.config.scoring.compare_options()
    }
}
