//! Output formatting utilities

use crate::domain::tags::encode_tag_slug;
use crate::domain::{HeadingEntry, Post, TagInfo};

/// Format headings as a nested markdown list of anchor links
pub fn format_toc(headings: &[HeadingEntry]) -> String {
    let Some(base) = headings.iter().map(|h| h.level).min() else {
        return "No headings found".to_string();
    };

    let mut output = String::new();
    for heading in headings {
        let indent = "  ".repeat(usize::from(heading.level - base));
        output.push_str(&format!(
            "{}- [{}]({})\n",
            indent,
            heading.text,
            heading.anchor()
        ));
    }
    output
}

/// Format tags as aligned `name  slug  count` rows.
///
/// Tags whose slug is empty show their encoded name instead, which is what
/// `quire posts --tag` expects for them.
pub fn format_tag_list(tags: &[TagInfo]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let rows: Vec<(&str, String, usize)> = tags
        .iter()
        .map(|t| {
            let route = if t.slug.is_empty() {
                encode_tag_slug(&t.name)
            } else {
                t.slug.clone()
            };
            (t.name.as_str(), route, t.count)
        })
        .collect();

    let name_width = rows.iter().map(|(n, _, _)| n.chars().count()).max().unwrap_or(0);
    let route_width = rows.iter().map(|(_, r, _)| r.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for (name, route, count) in rows {
        output.push_str(&format!(
            "{:<nw$}  {:<rw$}  {}\n",
            name,
            route,
            count,
            nw = name_width,
            rw = route_width
        ));
    }
    output
}

/// Format posts as `date  slug  title` rows
pub fn format_post_list(posts: &[Post]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in posts {
        if let Some(date) = post.date {
            output.push_str(&format!(
                "{}  {}  {}\n",
                date.format("%Y-%m-%d"),
                post.slug,
                post.title
            ));
        } else {
            // Undated - keep the slug column aligned
            output.push_str(&format!("            {}  {}\n", post.slug, post.title));
        }
    }
    output
}
