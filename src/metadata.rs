//! Member path matching and metadata enrichment.
//!
//! Corpus members live at `<root>/<split>/<sentiment>/<movie_id>_<grade>.txt`,
//! where `grade` is a rating between 1 and 10, e.g. `aclImdb/train/pos/123_9.txt`.
//! [MemberPattern] both filters archive members and extracts their metadata.
use lazy_static::lazy_static;
use log::info;
use regex::{Captures, Regex};

use crate::error::Error;
use crate::pipelines::imdb::types::{RawReview, Review, Sentiment, Split};

/// Root folder of the corpus inside the official archive.
pub const DEFAULT_ROOT: &str = "aclImdb";

lazy_static! {
    static ref DEFAULT_PATTERN: Regex =
        Regex::new(&MemberPattern::source(DEFAULT_ROOT)).unwrap();
}

#[derive(Debug, Clone)]
pub struct MemberPattern {
    re: Regex,
}

impl MemberPattern {
    /// Build a pattern for a corpus rooted at `root`.
    pub fn new(root: &str) -> Result<Self, Error> {
        let re = Regex::new(&Self::source(root))?;
        Ok(Self { re })
    }

    fn source(root: &str) -> String {
        format!(
            r"^(?P<root>{})/(?P<dataset>train|test)/(?P<sentiment>pos|neg)/(?P<movie_id>\d+)_(?P<grade>[1-9]|10)\.txt$",
            regex::escape(root)
        )
    }

    /// Does the member path belong to the labeled corpus?
    pub fn is_match(&self, path: &str) -> bool {
        self.re.is_match(path)
    }

    fn captures<'p>(&self, path: &'p str) -> Result<Captures<'p>, Error> {
        self.re
            .captures(path)
            .ok_or_else(|| Error::UnexpectedPath(path.to_string()))
    }

    /// Turn a raw row into an enriched one.
    ///
    /// Fails with [Error::UnexpectedPath] when the path does not have the expected structure.
    pub fn enrich(&self, raw: RawReview) -> Result<Review, Error> {
        let (file_path, review) = raw.into_parts();
        let caps = self.captures(&file_path)?;

        // the groups can only hold the alternatives listed in the pattern
        let unexpected = || Error::UnexpectedPath(file_path.clone());
        let dataset = Split::from_segment(&caps["dataset"]).ok_or_else(unexpected)?;
        let sentiment = Sentiment::from_segment(&caps["sentiment"]).ok_or_else(unexpected)?;

        Ok(Review::new(
            review,
            dataset,
            sentiment,
            caps["movie_id"].to_string(),
            caps["grade"].to_string(),
        ))
    }
}

impl Default for MemberPattern {
    fn default() -> Self {
        Self {
            re: DEFAULT_PATTERN.clone(),
        }
    }
}

/// Add split, sentiment, movie id and grade to every row, dropping the member path.
pub fn enrich(rows: Vec<RawReview>, pattern: &MemberPattern) -> Result<Vec<Review>, Error> {
    info!("Add metadata");
    rows.into_iter().map(|row| pattern.enrich(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_corpus_members() {
        let p = MemberPattern::default();
        assert!(p.is_match("aclImdb/train/pos/123_9.txt"));
        assert!(p.is_match("aclImdb/test/neg/0_1.txt"));
        assert!(p.is_match("aclImdb/test/neg/42_10.txt"));
    }

    #[test]
    fn rejects_other_members() {
        let p = MemberPattern::default();
        for path in [
            "aclImdb/unsup/pos/1_0.txt",
            "aclImdb/train/pos/1_0.txt",
            "aclImdb/train/pos/1_11.txt",
            "aclImdb/train/unsup/1_3.txt",
            "aclImdb/train/urls_pos.txt",
            "aclImdb/train/pos/",
            "aclImdb/train/pos/1_3xtxt",
            "aclImdb/train/pos/1_3.txt.bak",
            "other/train/pos/1_3.txt",
            "aclImdb/imdb.vocab",
        ] {
            assert!(!p.is_match(path), "{} should not match", path);
        }
    }

    #[test]
    fn custom_root_is_escaped() {
        let p = MemberPattern::new("acl.Imdb").unwrap();
        assert!(p.is_match("acl.Imdb/train/pos/1_3.txt"));
        assert!(!p.is_match("aclxImdb/train/pos/1_3.txt"));
    }

    #[test]
    fn enrich_row() {
        let p = MemberPattern::default();
        let raw = RawReview::new(
            "aclImdb/train/pos/123_9.txt".to_string(),
            "<b>Great!</b>".to_string(),
        );
        let review = p.enrich(raw).unwrap();
        assert_eq!(review.dataset(), Split::Train);
        assert_eq!(review.sentiment(), Sentiment::Pos);
        assert_eq!(review.sentiment().label(), 1);
        assert_eq!(review.movie_id(), "123");
        assert_eq!(review.grade(), "9");
        assert_eq!(review.review(), "<b>Great!</b>");
    }

    #[test]
    fn enrich_negative_test_row() {
        let p = MemberPattern::default();
        let raw = RawReview::new("aclImdb/test/neg/7_10.txt".to_string(), String::new());
        let review = p.enrich(raw).unwrap();
        assert_eq!(review.dataset(), Split::Test);
        assert_eq!(review.sentiment().label(), 0);
        assert_eq!(review.movie_id(), "7");
        assert_eq!(review.grade(), "10");
    }

    #[test]
    fn enrich_unexpected_path() {
        let rows = vec![RawReview::new(
            "aclImdb/train/pos/extra/123_9.txt".to_string(),
            String::new(),
        )];
        match enrich(rows, &MemberPattern::default()) {
            Err(Error::UnexpectedPath(p)) => assert_eq!(p, "aclImdb/train/pos/extra/123_9.txt"),
            other => panic!("expected UnexpectedPath, got {:?}", other),
        }
    }
}
