//! Configuration module for the advisor application.
//!
//! Values come from the environment (after `.env` is loaded); CLI flags
//! override them where both exist.

use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Env, Format, Toml};
use serde::Deserialize;

use crate::catalog::{AssemblyOptions, DEFAULT_BACKUP_POOL_SIZE};

/// Optional TOML file read before the environment.
pub const CONFIG_FILE: &str = "advisor.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log level for the `advisor` crate (`trace`..`error`). Overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Catalog JSON file.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// How many top-rated professors can stand in for a course with none.
    #[serde(default = "default_backup_pool_size")]
    pub backup_pool_size: usize,
    /// Seed for the backup-instructor pick; unset means random.
    #[serde(default)]
    pub backup_seed: Option<u64>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_backup_pool_size() -> usize {
    DEFAULT_BACKUP_POOL_SIZE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            catalog_path: None,
            backup_pool_size: default_backup_pool_size(),
            backup_seed: None,
        }
    }
}

impl Config {
    /// Layered sources: `advisor.toml`, then raw environment variables.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::raw().only(&[
                "log_level",
                "catalog_path",
                "backup_pool_size",
                "backup_seed",
            ]))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    pub fn assembly_options(&self) -> AssemblyOptions {
        AssemblyOptions {
            backup_pool_size: self.backup_pool_size,
            seed: self.backup_seed,
        }
    }
}
