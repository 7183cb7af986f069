//! Post records

use chrono::NaiveDate;
use std::path::PathBuf;

/// A blog post as supplied by the content loader.
///
/// The aggregator only reads posts; nothing in `domain` mutates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub tags: Vec<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub published: bool,
    /// Markdown after the front matter
    pub body: String,
    /// Path relative to the content directory
    pub source: PathBuf,
}

impl Post {
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Post {
            slug: slug.into(),
            title: title.into(),
            tags: Vec::new(),
            date: None,
            description: None,
            published: true,
            body: String::new(),
            source: PathBuf::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }
}

/// Drop drafts, keeping the original order.
pub fn published_posts(posts: Vec<Post>) -> Vec<Post> {
    posts.into_iter().filter(|p| p.published).collect()
}

/// Sort newest first. Undated posts go last; ties are broken by slug.
pub fn sort_by_date_desc(posts: &mut [Post]) {
    posts.sort_by(|a, b| match (a.date, b.date) {
        (Some(da), Some(db)) => db.cmp(&da).then_with(|| a.slug.cmp(&b.slug)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => a.slug.cmp(&b.slug),
    });
}
