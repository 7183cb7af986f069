//! Domain layer - Pure content logic

pub mod headings;
pub mod post;
pub mod tags;

pub use headings::{extract_headings, HeadingEntry, HeadingExtractor};
pub use post::Post;
pub use tags::TagInfo;
