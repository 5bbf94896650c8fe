// file: src/output/mod.rs
// description: output sink module exports
// reference: internal module structure

pub mod sink;

pub use sink::OutputSink;
