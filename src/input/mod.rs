// file: src/input/mod.rs
// description: input collection module exports
// reference: internal module structure

pub mod collector;

pub use collector::{ListSource, Mode, SourceFlags, read_repo_list, read_repos};
