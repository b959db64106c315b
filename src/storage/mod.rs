//! Filesystem access for the weapon dataset.
//!
//! The dataset is a single JSON document in the data directory. It is read
//! once at startup and never modified by the application.

use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

use thiserror::Error;
use tracing::info;

use crate::models::Dataset;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub dataset_file: String,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            dataset_file: "weapon_data.json".to_string(),
        }
    }

    pub fn with_dataset_file(mut self, file: &str) -> Self {
        self.dataset_file = file.to_string();
        self
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(&self.dataset_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Read the weapon dataset.
pub fn read_dataset(config: &StorageConfig) -> Result<Dataset, StorageError> {
    let path = config.dataset_path();
    if !path.exists() {
        return Err(StorageError::PathNotFound(path));
    }

    let reader = BufReader::new(fs::File::open(&path)?);
    let dataset: Dataset = serde_json::from_reader(reader)?;

    info!(
        "Loaded {} categories and {} weapon records from {:?}",
        dataset.categories.len(),
        dataset.weapons.len(),
        path
    );
    Ok(dataset)
}
