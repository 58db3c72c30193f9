//! IMDb Large Movie Review corpus.
mod pipeline;
pub mod types;

pub use pipeline::{ImdbCorpus, PipelineConfig};
pub use types::{RawReview, Review, Sentiment, Split};
