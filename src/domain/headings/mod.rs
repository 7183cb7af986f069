//! Table-of-contents extraction

pub mod extractor;
pub mod slugger;

pub use extractor::{extract_headings, HeadingEntry, HeadingExtractor};
pub use slugger::{anchor_slug, Slugger};
