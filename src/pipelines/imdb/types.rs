//! Review rows.
//!
//! A row starts its life as a [RawReview] (member path + raw body) and
//! becomes a [Review] once its path has been turned into metadata.
use std::fmt;

use serde::Serialize;

/// Row produced by the archive extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReview {
    file_path: String,
    review: String,
}

impl RawReview {
    pub fn new(file_path: String, review: String) -> Self {
        Self { file_path, review }
    }

    /// Get a reference to the archive-relative member path.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Get a reference to the raw (html) review body.
    pub fn review(&self) -> &str {
        &self.review
    }

    pub fn into_parts(self) -> (String, String) {
        (self.file_path, self.review)
    }
}

/// Corpus partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    /// Every split, in writing order.
    pub const ALL: [Split; 2] = [Split::Train, Split::Test];

    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }

    /// Capitalized name, used in logs.
    pub fn title(&self) -> &'static str {
        match self {
            Split::Train => "Train",
            Split::Test => "Test",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "train" => Some(Split::Train),
            "test" => Some(Split::Test),
            _ => None,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review polarity, binarized to `1` (positive) and `0` (negative) on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Pos,
    Neg,
}

impl Sentiment {
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "pos" => Some(Sentiment::Pos),
            "neg" => Some(Sentiment::Neg),
            _ => None,
        }
    }

    pub fn label(&self) -> u8 {
        match self {
            Sentiment::Pos => 1,
            Sentiment::Neg => 0,
        }
    }
}

/// Enriched review row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    review: String,
    dataset: Split,
    sentiment: Sentiment,
    movie_id: String,
    grade: String,
}

impl Review {
    pub fn new(
        review: String,
        dataset: Split,
        sentiment: Sentiment,
        movie_id: String,
        grade: String,
    ) -> Self {
        Self {
            review,
            dataset,
            sentiment,
            movie_id,
            grade,
        }
    }

    pub fn review(&self) -> &str {
        &self.review
    }

    pub fn set_review(&mut self, review: String) {
        self.review = review;
    }

    pub fn dataset(&self) -> Split {
        self.dataset
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Output record (the `dataset` column is implied by the destination file).
    pub fn record(&self) -> ReviewRecord<'_> {
        ReviewRecord {
            review: &self.review,
            sentiment: self.sentiment.label(),
            movie_id: &self.movie_id,
            grade: &self.grade,
        }
    }
}

/// A serializable output line. Field order is the column order.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ReviewRecord<'a> {
    pub review: &'a str,
    pub sentiment: u8,
    pub movie_id: &'a str,
    pub grade: &'a str,
}

impl ReviewRecord<'_> {
    pub const HEADER: [&'static str; 4] = ["review", "sentiment", "movie_id", "grade"];
}
