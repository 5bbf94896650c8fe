// file: src/directory/mod.rs
// description: Local directory enumeration module exports
// reference: Internal module structure

pub mod enumerator;

pub use enumerator::DirectoryEnumerator;
