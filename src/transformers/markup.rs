//! Renders html review bodies as plain text.
//!
//! Reviews contain light markup (mostly `<br />`, sometimes emphasis or links).
//! Links and emphasis are dropped: `<b>Great!</b>` becomes `Great!`.
use html2text::render::text_renderer::TrivialDecorator;

use crate::error::Error;
use crate::pipelines::imdb::types::Review;

use super::Transform;

pub struct StripMarkup {
    width: usize,
}

impl StripMarkup {
    /// Default wrapping width, in columns.
    pub const DEFAULT_WIDTH: usize = 78;

    /// Narrowest accepted wrapping width.
    pub const MIN_WIDTH: usize = 20;

    /// Use a custom wrapping width.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Check that `width` leaves enough room to render nested markup.
    pub fn check_width(width: usize) -> Result<usize, Error> {
        if width < Self::MIN_WIDTH {
            return Err(Error::Config(format!(
                "width {} is below the minimum of {}",
                width,
                Self::MIN_WIDTH
            )));
        }
        Ok(width)
    }

    /// Plain text rendering of `html`, without trailing whitespace.
    pub fn render(&self, html: &str) -> Result<String, Error> {
        let text = html2text::config::with_decorator(TrivialDecorator::new())
            .string_from_read(html.as_bytes(), self.width)?;

        Ok(text.trim_end().to_string())
    }
}

impl Default for StripMarkup {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH)
    }
}

impl Transform for StripMarkup {
    fn transform_own(&self, mut review: Review) -> Result<Review, Error> {
        let text = self.render(review.review())?;
        review.set_review(text);
        Ok(review)
    }
}
