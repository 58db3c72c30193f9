//! Corpus sources.
pub mod archive;

pub use archive::ReviewArchive;
