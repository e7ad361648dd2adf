//! # mrp-config
//!
//! Layered configuration loading for the MRP tracker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MRP_*` prefix, `__` as separator)
//! 2. Project-level `.mrp/config.toml`
//! 3. User-level `~/.config/mrp/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MRP_DATABASE__PATH` -> `database.path`,
//! `MRP_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use mrp_config::MrpConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = MrpConfig::load_with_dotenv().expect("config");
//! println!("database at {}", config.database.path);
//! ```

mod database;
mod error;
mod general;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MrpConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl MrpConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`MrpConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`MRP_*` prefix)
    /// 2. `.mrp/config.toml` (project-local)
    /// 3. `~/.config/mrp/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load a `.env` file from the current directory (or
    /// an ancestor) before building the figment. This is the typical entry
    /// point for the CLI and tests.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".mrp/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("MRP_").split("__"));

        figment
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("mrp").join("config.toml"))
    }
}
