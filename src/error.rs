// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, JeloxError>;

#[derive(Error, Debug)]
pub enum JeloxError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to create scratch directory {path}: {source}")]
    CreateScratch {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to remove scratch directory {path}: {source}")]
    RemoveScratch {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("Clone failed for {url}: {stderr}")]
    Clone { url: String, stderr: String },

    #[error("Listing files failed in {path}: {message}")]
    Listing { path: PathBuf, message: String },

    #[error("Directory does not exist: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Cannot resolve absolute path for {path}: {source}")]
    PathResolution {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot make {path} relative to {root}")]
    RelativePath { path: PathBuf, root: PathBuf },

    #[error("Failed to create output file {path}: {source}")]
    OutputCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to open list file {path}: {source}")]
    InputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
