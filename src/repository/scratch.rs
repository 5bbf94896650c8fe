// file: src/repository/scratch.rs
// description: uniquely named temporary directory for one clone-and-list cycle
// reference: https://docs.rs/uuid

use crate::config::ScratchConfig;
use crate::error::{JeloxError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug)]
pub struct ScratchWorkspace {
    path: PathBuf,
}

impl ScratchWorkspace {
    /// `<base>/<namespace>/<prefix>-<uuid v4>`; never created here.
    pub fn unique_path(config: &ScratchConfig) -> PathBuf {
        config
            .base_dir()
            .join(&config.namespace)
            .join(format!("{}-{}", config.prefix, Uuid::new_v4()))
    }

    pub fn create(config: &ScratchConfig) -> Result<Self> {
        let path = Self::unique_path(config);

        fs::create_dir_all(&path).map_err(|source| JeloxError::CreateScratch {
            path: path.clone(),
            source,
        })?;

        debug!("Created scratch directory {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn remove(self) -> Result<()> {
        fs::remove_dir_all(&self.path).map_err(|source| JeloxError::RemoveScratch {
            path: self.path.clone(),
            source,
        })?;

        debug!("Removed scratch directory {}", self.path.display());
        Ok(())
    }
}
