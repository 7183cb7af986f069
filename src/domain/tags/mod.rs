//! Tag aggregation

pub mod aggregate;
pub mod filter;
pub mod slug;

// Re-export main types
pub use aggregate::{all_tags, popular_tags, sort_alphabetical, TagInfo, DEFAULT_POPULAR_LIMIT};
pub use filter::posts_by_tag;
pub use slug::{encode_tag_slug, slugify, tag_name_from_slug};
