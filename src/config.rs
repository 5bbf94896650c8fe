// file: src/config.rs
// description: application configuration loaded from JELOX_* environment variables
// reference: https://docs.rs/config

use crate::error::{JeloxError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "JELOX";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub git: GitConfig,
    pub scratch: ScratchConfig,
    pub listing: ListingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitConfig {
    pub program: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScratchConfig {
    /// Parent of the namespace directory. Falls back to the OS temp dir.
    #[serde(default)]
    pub base_dir: Option<PathBuf>,
    pub namespace: String,
    pub prefix: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    pub backend: ListingBackend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingBackend {
    /// `find` on unix-likes, `cmd /C dir` on Windows.
    Native,
    /// In-process walk with walkdir.
    Walk,
}

impl ScratchConfig {
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir.clone().unwrap_or_else(std::env::temp_dir)
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        Self::load_from(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
    }

    pub fn load_from(environment: config::Environment) -> Result<Self> {
        let defaults = Self::default_config();

        let settings = config::Config::builder()
            .set_default("git.program", defaults.git.program)
            .and_then(|b| b.set_default("scratch.namespace", defaults.scratch.namespace))
            .and_then(|b| b.set_default("scratch.prefix", defaults.scratch.prefix))
            .and_then(|b| b.set_default("listing.backend", "native"))
            .map_err(|e| JeloxError::Config(e.to_string()))?
            .add_source(environment)
            .build()
            .map_err(|e| JeloxError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| JeloxError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            git: GitConfig {
                program: "git".to_string(),
            },
            scratch: ScratchConfig {
                base_dir: None,
                namespace: "jelox-repo".to_string(),
                prefix: "jelo".to_string(),
            },
            listing: ListingConfig {
                backend: ListingBackend::Native,
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.git.program.trim().is_empty() {
            return Err(JeloxError::Config(
                "git.program must not be empty".to_string(),
            ));
        }

        if self.scratch.namespace.trim().is_empty() {
            return Err(JeloxError::Config(
                "scratch.namespace must not be empty".to_string(),
            ));
        }

        if self.scratch.prefix.trim().is_empty() {
            return Err(JeloxError::Config(
                "scratch.prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
