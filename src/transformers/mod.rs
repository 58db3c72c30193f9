/*! Review transformers.

Rewrite review bodies, one row at a time.

!*/

mod delimiter;
mod markup;
mod transform;

pub use delimiter::RemoveDelimiter;
pub use markup::StripMarkup;
pub use transform::Transform;
