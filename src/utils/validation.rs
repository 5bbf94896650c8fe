// file: src/utils/validation.rs
// description: input cleanup and path normalization helpers
// reference: input validation patterns

use crate::error::{JeloxError, Result};
use std::path::{Path, PathBuf};

pub struct Validator;

impl Validator {
    pub fn clean_url(url: &str) -> String {
        url.trim().to_string()
    }

    pub fn validate_directory(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(JeloxError::DirectoryNotFound(path.to_path_buf()));
        }

        Ok(())
    }

    /// Absolute form of `path` without resolving symlinks, matching what listing tools print.
    pub fn resolve_root(path: &Path) -> Result<PathBuf> {
        std::path::absolute(path).map_err(|source| JeloxError::PathResolution {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn relative_to(path: &Path, root: &Path) -> Result<String> {
        let relative = path
            .strip_prefix(root)
            .map_err(|_| JeloxError::RelativePath {
                path: path.to_path_buf(),
                root: root.to_path_buf(),
            })?;

        if relative.as_os_str().is_empty() {
            return Ok(".".to_string());
        }

        Ok(relative.to_string_lossy().to_string())
    }
}
