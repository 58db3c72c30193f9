//! Delimited split files.
//!
//! Each split ends up in `<dst>/<split>.csv`, with a header line
//! and one `review|sentiment|movie_id|grade` record per review.
use std::path::{Path, PathBuf};

use log::info;

use crate::error::Error;
use crate::pipelines::imdb::types::{Review, ReviewRecord, Split};

/// Field delimiter of the split files.
///
/// [crate::transformers::RemoveDelimiter] strips it from review bodies.
pub const DELIMITER: u8 = b'|';

/// Number of rows written per split.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SplitCounts {
    pub train: usize,
    pub test: usize,
}

impl SplitCounts {
    pub fn get(&self, split: Split) -> usize {
        match split {
            Split::Train => self.train,
            Split::Test => self.test,
        }
    }

    fn set(&mut self, split: Split, count: usize) {
        match split {
            Split::Train => self.train = count,
            Split::Test => self.test = count,
        }
    }

    pub fn total(&self) -> usize {
        self.train + self.test
    }
}

/// Writes reviews into per-split files located in `dst`.
///
/// `dst` has to exist beforehand.
pub struct SplitWriter {
    dst: PathBuf,
}

impl SplitWriter {
    pub fn new(dst: &Path) -> Self {
        Self {
            dst: dst.to_path_buf(),
        }
    }

    /// Location of the file holding `split`.
    pub fn path(&self, split: Split) -> PathBuf {
        self.dst.join(format!("{}.csv", split))
    }

    /// Write every split, even empty ones, overwriting existing files.
    ///
    /// Splits are written one after the other: a failure leaves
    /// previously written splits in place.
    pub fn write(&self, reviews: &[Review]) -> Result<SplitCounts, Error> {
        let mut counts = SplitCounts::default();
        for split in Split::ALL {
            let rows = reviews.iter().filter(|review| review.dataset() == split);
            let nb = self.write_split(split, rows)?;
            info!("{}", self.stored_message(split));
            counts.set(split, nb);
        }

        Ok(counts)
    }

    fn stored_message(&self, split: Split) -> String {
        format!("{} dataset stored in {}", split.title(), self.dst.display())
    }

    /// Write a single split file, returning the number of rows written.
    pub fn write_split<'r>(
        &self,
        split: Split,
        reviews: impl Iterator<Item = &'r Review>,
    ) -> Result<usize, Error> {
        let path = self.path(split);
        let mut out = csv::WriterBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(false)
            .from_path(&path)?;

        // written by hand so that empty splits still get one
        out.write_record(ReviewRecord::HEADER)?;

        let mut nb = 0;
        for review in reviews {
            out.serialize(review.record())?;
            nb += 1;
        }
        out.flush()?;

        Ok(nb)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::pipelines::imdb::types::Sentiment;

    use super::*;

    fn review(body: &str, dataset: Split, sentiment: Sentiment, id: &str, grade: &str) -> Review {
        Review::new(
            body.to_string(),
            dataset,
            sentiment,
            id.to_string(),
            grade.to_string(),
        )
    }

    #[test]
    fn write_partitions() {
        let dst = tempdir().unwrap();
        let reviews = vec![
            review("Great!", Split::Train, Sentiment::Pos, "123", "9"),
            review("Awful.", Split::Test, Sentiment::Neg, "4", "2"),
            review("Meh", Split::Train, Sentiment::Neg, "5", "4"),
        ];

        let counts = SplitWriter::new(dst.path()).write(&reviews).unwrap();
        assert_eq!(counts, SplitCounts { train: 2, test: 1 });
        assert_eq!(counts.total(), 3);

        let train = fs::read_to_string(dst.path().join("train.csv")).unwrap();
        assert_eq!(
            train,
            "review|sentiment|movie_id|grade\nGreat!|1|123|9\nMeh|0|5|4\n"
        );
        let test = fs::read_to_string(dst.path().join("test.csv")).unwrap();
        assert_eq!(test, "review|sentiment|movie_id|grade\nAwful.|0|4|2\n");
    }

    #[test]
    fn empty_split_has_header() {
        let dst = tempdir().unwrap();
        let reviews = vec![review("Great!", Split::Train, Sentiment::Pos, "1", "8")];

        let counts = SplitWriter::new(dst.path()).write(&reviews).unwrap();
        assert_eq!(counts.get(Split::Test), 0);

        let test = fs::read_to_string(dst.path().join("test.csv")).unwrap();
        assert_eq!(test, "review|sentiment|movie_id|grade\n");
    }

    #[test]
    fn multiline_reviews_are_quoted() {
        let dst = tempdir().unwrap();
        let reviews = vec![review(
            "first\nsecond \"quoted\"",
            Split::Train,
            Sentiment::Pos,
            "1",
            "10",
        )];
        SplitWriter::new(dst.path()).write(&reviews).unwrap();

        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_path(dst.path().join("train.csv"))
            .unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "first\nsecond \"quoted\"");
        assert_eq!(&rows[0][3], "10");
    }

    #[test]
    fn stored_message_shows_plain_path() {
        let w = SplitWriter::new(Path::new("data/processed"));
        assert_eq!(
            w.stored_message(Split::Train),
            "Train dataset stored in data/processed"
        );
    }

    #[test]
    fn missing_destination_is_fatal() {
        let dst = tempdir().unwrap();
        let missing = dst.path().join("not").join("there");
        let res = SplitWriter::new(&missing).write(&[]);
        assert!(res.is_err());
        assert!(!missing.join("train.csv").exists());
    }
}
