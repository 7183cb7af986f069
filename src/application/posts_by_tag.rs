//! Posts by tag use case

use crate::domain::tags::posts_by_tag;
use crate::domain::Post;
use crate::error::{QuireError, Result};
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use tracing::debug;

/// Service for listing the posts carrying a tag.
pub struct PostsByTagService {
    repository: FileSystemRepository,
}

impl PostsByTagService {
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Posts tagged `tag_slug`, newest first. Errors when nothing matches.
    pub fn execute(&self, tag_slug: &str) -> Result<Vec<Post>> {
        let config = self.repository.load_config()?;
        let posts = self.repository.load_posts(&config)?;

        let matched: Vec<Post> = posts_by_tag(&posts, tag_slug)
            .into_iter()
            .cloned()
            .collect();
        debug!(tag = tag_slug, count = matched.len(), "filtered posts by tag");

        if matched.is_empty() {
            return Err(QuireError::TagNotFound(tag_slug.to_string()));
        }
        Ok(matched)
    }
}
