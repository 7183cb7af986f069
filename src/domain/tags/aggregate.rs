//! Tag counting and ordering
//!
//! Counts are keyed by the exact tag string as authored. `Go` and `go` are
//! two entries even though both slug to `go`; consumers that route by slug
//! must be ready to see the same slug more than once.

use super::slugify;
use crate::domain::Post;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Default number of entries returned by [`popular_tags`]
pub const DEFAULT_POPULAR_LIMIT: usize = 10;

/// A tag with its routing slug and post count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagInfo {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

impl TagInfo {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        TagInfo { name, slug, count }
    }
}

/// Count every tag occurrence across `posts`.
///
/// Sorted by count descending; equal counts keep the order in which the tag
/// was first seen.
pub fn all_tags(posts: &[Post]) -> Vec<TagInfo> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for post in posts {
        for tag in &post.tags {
            match index.get(tag.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(tag.as_str(), counts.len());
                    counts.push((tag.as_str(), 1));
                }
            }
        }
    }

    let mut tags: Vec<TagInfo> = counts
        .into_iter()
        .map(|(name, count)| TagInfo::new(name, count))
        .collect();
    sort_by_count_desc(&mut tags);
    tags
}

/// The `limit` most used tags, regardless of the input order.
pub fn popular_tags(tags: &[TagInfo], limit: usize) -> Vec<TagInfo> {
    let mut sorted = tags.to_vec();
    sort_by_count_desc(&mut sorted);
    sorted.truncate(limit);
    sorted
}

/// Order tags for display by name.
///
/// Names compare case-insensitively first and fall back to the original
/// spelling, so `apple`, `Banana`, `cherry` stay in dictionary order instead
/// of putting every capitalised name first.
pub fn sort_alphabetical(tags: &[TagInfo]) -> Vec<TagInfo> {
    let mut sorted = tags.to_vec();
    sorted.sort_by(|a, b| collate(&a.name, &b.name));
    sorted
}

fn sort_by_count_desc(tags: &mut [TagInfo]) {
    // stable: ties keep their relative order
    tags.sort_by(|a, b| b.count.cmp(&a.count));
}

fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
