pub mod app;
pub mod config;
pub mod grid;
pub mod models;
pub mod seed;
pub mod services;
pub mod storage;
pub mod views;

use std::sync::Arc;

use crate::config::{Config, StorageBackend};
use crate::storage::{FileStorage, MemoryStorage, StorageError, StorageService};

// Shared state for the whole application
pub struct AppState {
    pub storage: Arc<dyn StorageService>,
    pub config: Config,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Arc<Self>, StorageError> {
        let storage: Arc<dyn StorageService> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(MemoryStorage::new()),
            StorageBackend::File => Arc::new(FileStorage::open(config.storage.path.clone()).await?),
        };

        if config.app.seed_demo_data {
            seed::ensure_demo_data(&storage).await?;
        }

        Ok(Arc::new(Self { storage, config }))
    }
}
