// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod directory;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod repository;
pub mod utils;

pub use config::{Config, GitConfig, ListingBackend, ListingConfig, ScratchConfig};
pub use directory::DirectoryEnumerator;
pub use error::{JeloxError, Result};
pub use input::{ListSource, Mode, SourceFlags};
pub use models::PathCollection;
pub use output::OutputSink;
pub use pipeline::{Orchestrator, ProgressTracker, RunOutcome, RunStats};
pub use repository::{RepositoryEnumerator, ScratchWorkspace};
pub use utils::Validator;
