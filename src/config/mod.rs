//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::calculate::{CompareOptions, ObjectiveRegistry};
use crate::catalog::DEFAULT_SHOTGUN_CATEGORY;
use crate::storage::StorageConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origin, `*` for any
    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Leaderboard display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingsConfig {
    /// Entries shown before the list is expanded
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_top_n() -> usize {
    3
}

impl Default for RankingsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
        }
    }
}

/// Scoring rules that differ between deployments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Category whose members count as shotguns
    #[serde(default = "default_shotgun_category")]
    pub shotgun_category: String,

    #[serde(default = "default_true")]
    pub single_pellet_min_damage_in_ranking: bool,

    #[serde(default = "default_true")]
    pub single_pellet_min_damage_in_comparison: bool,
}

fn default_shotgun_category() -> String {
    DEFAULT_SHOTGUN_CATEGORY.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            shotgun_category: default_shotgun_category(),
            single_pellet_min_damage_in_ranking: true,
            single_pellet_min_damage_in_comparison: true,
        }
    }
}

impl ScoringConfig {
    /// Objective registry with the configured ranking rules.
    pub fn registry(&self) -> ObjectiveRegistry {
        ObjectiveRegistry::standard()
            .with_single_pellet_min_damage(self.single_pellet_min_damage_in_ranking)
    }

    pub fn compare_options(&self) -> CompareOptions {
        CompareOptions {
            single_pellet_min_damage: self.single_pellet_min_damage_in_comparison,
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Dataset file name inside `data_dir`
    #[serde(default = "default_dataset_file")]
    pub dataset_file: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub rankings: RankingsConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_dataset_file() -> String {
    "weapon_data.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            dataset_file: default_dataset_file(),
            log_level: default_log_level(),
            server: ServerConfig::default(),
            rankings: RankingsConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.rankings.top_n == 0 {
            return Err(ConfigError::ValidationError(
                "rankings.top_n must be greater than 0".to_string(),
            ));
        }

        if self.scoring.shotgun_category.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "scoring.shotgun_category must not be empty".to_string(),
            ));
        }

        if self.dataset_file.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "dataset_file must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn storage(&self) -> StorageConfig {
        StorageConfig::new(self.data_dir.clone()).with_dataset_file(&self.dataset_file)
    }
}
