use crate::infra::{config::AppConfig, storage_layout::StorageLayout};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub storage: StorageLayout,
}

impl AppContext {
    pub fn new(config: AppConfig, storage: StorageLayout) -> Self {
        Self { config, storage }
    }
}
