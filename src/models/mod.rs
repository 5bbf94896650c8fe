// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod path_collection;

pub use path_collection::PathCollection;
