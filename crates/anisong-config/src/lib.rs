//! # anisong-config
//!
//! Layered configuration loading for anisong using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ANISONG_*` prefix, `__` as separator)
//! 2. Project-level `.anisong/config.toml`
//! 3. User-level `~/.config/anisong/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ANISONG_CATALOG__PATH` -> `catalog.path`,
//! `ANISONG_SEARCH__MAX_RESULTS_PER_SEARCH` -> `search.max_results_per_search`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use anisong_config::AnisongConfig;
//!
//! let config = AnisongConfig::load_with_dotenv().expect("config");
//! println!("catalog at {}", config.catalog.path);
//! ```

mod catalog;
mod error;
mod search;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use search::SearchConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnisongConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl AnisongConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.search.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".anisong/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ANISONG_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("anisong").join("config.toml"))
    }
}
