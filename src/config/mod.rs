use serde::Deserialize;
use std::env;

// Top-level configuration container
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub storage: StorageConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
    pub seed_demo_data: bool,
}

// Storage backend settings
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "libbook=debug".to_string()),
                seed_demo_data: env::var("SEED_DEMO_DATA")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("SEED_DEMO_DATA must be true or false"),
            },
            storage: StorageConfig {
                backend: match env::var("STORAGE_BACKEND")
                    .unwrap_or_else(|_| "memory".to_string())
                    .as_str()
                {
                    "memory" => StorageBackend::Memory,
                    "file" => StorageBackend::File,
                    other => panic!("STORAGE_BACKEND must be memory or file, got {other}"),
                },
                path: env::var("STORAGE_PATH").unwrap_or_else(|_| "libbook.json".to_string()),
            },
        }
    }
}
