//! Filtering posts by tag slug

use super::{slugify, tag_name_from_slug};
use crate::domain::Post;

/// Posts carrying the tag routed as `tag_slug`.
///
/// A post matches when one of its tags slugifies to `tag_slug`, or when one
/// of its tags is exactly the percent-decoded `tag_slug`. The second path is
/// what makes tags like `개발` reachable: their slug is empty, so they are
/// routed by their encoded name instead.
pub fn posts_by_tag<'a>(posts: &'a [Post], tag_slug: &str) -> Vec<&'a Post> {
    let decoded = tag_name_from_slug(tag_slug);

    posts
        .iter()
        .filter(|post| {
            post.tags
                .iter()
                .any(|tag| slugify(tag) == tag_slug || *tag == decoded)
        })
        .collect()
}
