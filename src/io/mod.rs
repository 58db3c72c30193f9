/*!
# IO utilities

Writing of the processed corpus.
!*/
mod splitwriter;

pub use splitwriter::{SplitCounts, SplitWriter, DELIMITER};
