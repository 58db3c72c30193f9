//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! implemented by the IMDb review corpus pipeline ([ImdbCorpus]).
pub mod imdb;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use imdb::ImdbCorpus;
pub use pipeline::Pipeline;
