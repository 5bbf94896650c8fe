// file: src/repository/mod.rs
// description: Repository operations module exports
// reference: Internal module structure

pub mod enumerator;
pub mod scratch;

pub use enumerator::RepositoryEnumerator;
pub use scratch::ScratchWorkspace;
