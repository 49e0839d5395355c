//! # compass-config
//!
//! Layered configuration loading for Compass using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COMPASS_*` prefix, `__` as separator)
//! 2. Bare deployment variables: `LLM_*` (mapped to `llm.*`) and `PORT`
//! 3. Project-level `.compass/config.toml`
//! 4. User-level `~/.config/compass/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `COMPASS_LLM__API_KEY` -> `llm.api_key`, `COMPASS_SERVER__PORT` -> `server.port`.
//! `LLM_PROVIDER` -> `llm.provider`, `LLM_API_URL` -> `llm.api_url`, `PORT` -> `server.port`.
//!
//! # Usage
//!
//! ```no_run
//! use compass_config::CompassConfig;
//!
//! let config = CompassConfig::load_with_dotenv().expect("config");
//!
//! if config.llm.is_configured() {
//!     println!("LLM provider: {}", config.llm.kind());
//! }
//! ```

mod database;
mod error;
mod llm;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use llm::{
    DEFAULT_CHAT_MODEL, DEFAULT_GEMINI_MODEL, LlmConfig, LlmProviderKind, PLACEHOLDER_API_KEYS,
};
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CompassConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl CompassConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".compass/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Bare deployment variables
        figment = figment
            .merge(Env::prefixed("LLM_").map(|key| format!("llm.{key}").into()))
            .merge(Env::raw().only(&["PORT"]).map(|_| "server.port".into()));

        // Layer 4: Namespaced environment variables (highest priority)
        figment.merge(Env::prefixed("COMPASS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("compass").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or falls back to the
    /// current directory. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
