//! List tags use case

use crate::domain::tags::{all_tags, popular_tags, sort_alphabetical};
use crate::domain::TagInfo;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, SiteRepository};
use std::str::FromStr;

/// Display order for the tag list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TagSort {
    /// Most used first
    #[default]
    Count,
    /// Alphabetical by name
    Name,
}

impl FromStr for TagSort {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "count" => Ok(TagSort::Count),
            "name" => Ok(TagSort::Name),
            _ => Err(format!("Invalid sort order: {}. Valid values: count, name", s)),
        }
    }
}

/// Options for listing tags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagListOptions {
    /// `Some(None)` means "popular tags, using the configured limit"
    pub popular: Option<Option<usize>>,
    pub sort: TagSort,
}

/// Service for listing all tags used in posts.
pub struct ListTagsService {
    repository: FileSystemRepository,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Aggregate tags across the site's posts.
    pub fn execute(&self, options: TagListOptions) -> Result<Vec<TagInfo>> {
        let config = self.repository.load_config()?;
        let posts = self.repository.load_posts(&config)?;
        Ok(arrange_tags(all_tags(&posts), options, config.popular_limit))
    }
}

/// Apply the popular cut, then the display order.
pub fn arrange_tags(
    tags: Vec<TagInfo>,
    options: TagListOptions,
    popular_limit: usize,
) -> Vec<TagInfo> {
    let tags = match options.popular {
        Some(limit) => popular_tags(&tags, limit.unwrap_or(popular_limit)),
        None => tags,
    };

    match options.sort {
        TagSort::Count => tags,
        TagSort::Name => sort_alphabetical(&tags),
    }
}
