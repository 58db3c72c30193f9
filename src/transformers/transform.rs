//! Transform trait.
use crate::error::Error;
use crate::pipelines::imdb::types::Review;

pub trait Transform {
    /// Takes ownership of [Review] and returns it.
    fn transform_own(&self, review: Review) -> Result<Review, Error>;

    /// Transform every row, preserving order.
    fn transform_all(&self, reviews: Vec<Review>) -> Result<Vec<Review>, Error> {
        reviews
            .into_iter()
            .map(|review| self.transform_own(review))
            .collect()
    }
}
