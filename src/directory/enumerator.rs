// file: src/directory/enumerator.rs
// description: list regular files under a local directory as root-relative paths
// reference: https://docs.rs/walkdir

use crate::config::{Config, ListingBackend};
use crate::error::{JeloxError, Result};
use crate::models::PathCollection;
use crate::utils::validation::Validator;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, info};
use walkdir::WalkDir;

pub struct DirectoryEnumerator {
    backend: ListingBackend,
}

impl DirectoryEnumerator {
    pub fn new(config: &Config) -> Self {
        Self::with_backend(config.listing.backend)
    }

    pub fn with_backend(backend: ListingBackend) -> Self {
        Self { backend }
    }

    pub fn enumerate(&self, directory: &Path) -> Result<PathCollection> {
        Validator::validate_directory(directory)?;
        let root = Validator::resolve_root(directory)?;
        info!("Scanning directory: {}", root.display());

        let absolute = match self.backend {
            ListingBackend::Native => list_native(&root)?,
            ListingBackend::Walk => list_walk(&root)?,
        };

        let mut files = PathCollection::new();
        for path in absolute.iter() {
            files.push(Validator::relative_to(Path::new(path), &root)?);
        }

        info!("Found {} files", files.len());
        Ok(files)
    }
}

fn native_command(root: &Path) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "dir", "/B", "/S", "/A-D"]).arg(root);
        cmd
    } else {
        let mut cmd = Command::new("find");
        cmd.arg(root).args(["-type", "f", "-print0"]);
        cmd
    }
}

fn list_native(root: &Path) -> Result<PathCollection> {
    let mut cmd = native_command(root);
    cmd.stdin(Stdio::null());
    debug!("Running {:?}", cmd);

    let program = cmd.get_program().to_string_lossy().to_string();
    let output = cmd
        .output()
        .map_err(|source| JeloxError::Spawn { program, source })?;

    if !output.status.success() {
        return Err(JeloxError::Listing {
            path: root.to_path_buf(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    if cfg!(windows) {
        Ok(PathCollection::from_lines(&String::from_utf8_lossy(
            &output.stdout,
        )))
    } else {
        Ok(PathCollection::from_nul_separated(&output.stdout))
    }
}

fn list_walk(root: &Path) -> Result<PathCollection> {
    let mut files = PathCollection::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| JeloxError::Listing {
            path: root.to_path_buf(),
            message: e.to_string(),
        })?;

        if entry.file_type().is_file() {
            files.push(entry.path().to_string_lossy().to_string());
        }
    }

    Ok(files)
}
