//! Keeps the output delimiter out of review bodies.

use crate::error::Error;
use crate::io::DELIMITER;
use crate::pipelines::imdb::types::Review;

use super::Transform;

/// Replaces every occurrence of the output delimiter with a space.
#[derive(Default)]
pub struct RemoveDelimiter;

impl RemoveDelimiter {
    pub fn sanitize(text: &str) -> String {
        text.replace(char::from(DELIMITER), " ")
    }
}

impl Transform for RemoveDelimiter {
    fn transform_own(&self, mut review: Review) -> Result<Review, Error> {
        if review.review().contains(char::from(DELIMITER)) {
            let text = Self::sanitize(review.review());
            review.set_review(text);
        }
        Ok(review)
    }
}
