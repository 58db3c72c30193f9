use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use flate2::read::MultiGzDecoder;
use log::{debug, info};
use tar::Archive;

use crate::error::Error;
use crate::metadata::MemberPattern;
use crate::pipelines::imdb::types::RawReview;

/// Log progress every `PROGRESS_EVERY` scanned members.
const PROGRESS_EVERY: usize = 10_000;

/// Upper bound of the buffer preallocated from a member's declared size.
const MAX_PREALLOC: u64 = 1 << 20;

/// Corpus archive, generic over reader type.
///
/// The official corpus is distributed as a gzipped tarball,
/// see [ReviewArchive::from_path_gzip].
pub struct ReviewArchive<R: Read> {
    archive: Archive<R>,
}

impl ReviewArchive<MultiGzDecoder<BufReader<File>>> {
    /// Open a `.tar.gz` archive.
    pub fn from_path_gzip<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        let gzip_stream = MultiGzDecoder::new(BufReader::new(file));
        Ok(Self::new(gzip_stream))
    }
}

impl<R: Read> ReviewArchive<R> {
    /// Wrap an uncompressed tar stream.
    pub fn new(reader: R) -> Self {
        Self {
            archive: Archive::new(reader),
        }
    }

    /// Read every regular member matching `pattern`, in archive order.
    ///
    /// Members are streamed, so each one is read at most once.
    /// A matching member that is not valid UTF-8 aborts the whole read.
    pub fn reviews(&mut self, pattern: &MemberPattern) -> Result<Vec<RawReview>, Error> {
        let mut reviews = Vec::new();
        let mut scanned = 0;

        for entry in self.archive.entries()? {
            let mut entry = entry?;
            scanned += 1;
            if scanned % PROGRESS_EVERY == 0 {
                debug!("scanned {} members, kept {}", scanned, reviews.len());
            }

            if !entry.header().entry_type().is_file() {
                continue;
            }

            let path = entry.path()?.to_string_lossy().into_owned();
            if !pattern.is_match(&path) {
                continue;
            }

            // the declared size is not trusted, a corrupt header can announce anything
            let mut body = Vec::with_capacity(entry.size().min(MAX_PREALLOC) as usize);
            entry.read_to_end(&mut body)?;
            let review = match String::from_utf8(body) {
                Ok(review) => review,
                Err(source) => return Err(Error::Decode { path, source }),
            };

            reviews.push(RawReview::new(path, review));
        }

        info!("scanned {} members, kept {}", scanned, reviews.len());
        Ok(reviews)
    }
}

/// Extract labeled reviews from the gzipped tarball at `path`.
///
/// The archive is closed when this returns.
pub fn extract(path: &Path, pattern: &MemberPattern) -> Result<Vec<RawReview>, Error> {
    info!("Extract and parse dataset");
    let mut archive = ReviewArchive::from_path_gzip(path)?;
    archive.reviews(pattern)
}
