//! Application layer - Use cases and orchestration

pub mod init;
pub mod list_tags;
pub mod manage_config;
pub mod posts_by_tag;
pub mod table_of_contents;

pub use list_tags::{ListTagsService, TagListOptions, TagSort};
pub use manage_config::ConfigService;
pub use posts_by_tag::PostsByTagService;
pub use table_of_contents::{table_of_contents, TocOptions};
