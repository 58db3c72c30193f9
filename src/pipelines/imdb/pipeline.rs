//! IMDb sentiment corpus pipeline
//!
//! The corpus is distributed as a gzipped tarball holding one text file per review,
//! laid out as `aclImdb/<split>/<sentiment>/<movie_id>_<grade>.txt`.
//!
//! # Processing
//! 1. Labeled reviews are extracted from the archive, other members are ignored.
//! 1. Split, sentiment (binarized), movie id and grade are derived from member paths.
//! 1. Html markup is removed from review bodies.
//! 1. The output delimiter (`|`) is removed from review bodies.
//! 1. Each split is written into its own delimited file.
//!
//! Every step is run once, sequentially, on the whole in-memory corpus.
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Error;
use crate::io::{SplitCounts, SplitWriter};
use crate::metadata::{self, MemberPattern, DEFAULT_ROOT};
use crate::pipelines::pipeline::Pipeline;
use crate::sources::archive;
use crate::transformers::{RemoveDelimiter, StripMarkup, Transform};

/// Already resolved pipeline parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Path to the `.tar.gz` corpus.
    pub archive: PathBuf,
    /// Existing folder receiving `train.csv` and `test.csv`.
    pub dst: PathBuf,
    /// Name of the corpus root folder inside the archive.
    pub root: String,
    /// Wrapping width of rendered reviews.
    pub width: usize,
}

impl PipelineConfig {
    /// Default layout inside a data folder: `raw/aclImdb_v1.tar.gz` and `processed/`.
    pub fn from_data_folder(data_folder: &Path) -> Self {
        Self {
            archive: data_folder.join("raw").join("aclImdb_v1.tar.gz"),
            dst: data_folder.join("processed"),
            ..Default::default()
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            archive: PathBuf::from("raw/aclImdb_v1.tar.gz"),
            dst: PathBuf::from("processed"),
            root: DEFAULT_ROOT.to_string(),
            width: StripMarkup::DEFAULT_WIDTH,
        }
    }
}

pub struct ImdbCorpus {
    config: PipelineConfig,
}

impl ImdbCorpus {
    pub fn new(config: PipelineConfig) -> Self {
        debug!("using config {:?}", config);
        Self { config }
    }

}

impl Pipeline<SplitCounts> for ImdbCorpus {
    fn run(&self) -> Result<SplitCounts, Error> {
        // fail before reading the archive
        let width = StripMarkup::check_width(self.config.width)?;
        let pattern = if self.config.root == DEFAULT_ROOT {
            MemberPattern::default()
        } else {
            MemberPattern::new(&self.config.root)?
        };

        let reviews = archive::extract(&self.config.archive, &pattern)?;
        let reviews = metadata::enrich(reviews, &pattern)?;

        info!("Remove HTML content from reviews");
        let reviews = StripMarkup::new(width).transform_all(reviews)?;

        info!("Remove pipe (|) from reviews");
        let reviews = RemoveDelimiter.transform_all(reviews)?;

        SplitWriter::new(&self.config.dst).write(&reviews)
    }
}
