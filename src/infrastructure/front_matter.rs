//! `+++` TOML front matter

use crate::domain::Post;
use crate::error::{QuireError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

const FENCE: &str = "+++";

#[derive(Debug, Deserialize)]
struct RawFrontMatter {
    title: Option<String>,
    slug: Option<String>,
    date: Option<toml::Value>,
    #[serde(default)]
    tags: Vec<String>,
    description: Option<String>,
    published: Option<bool>,
    draft: Option<bool>,
}

/// Split a document into its front matter block and the body after it.
///
/// Returns `None` when the first line is not `+++` or the block is never
/// closed.
pub fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != FENCE {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == FENCE {
            return Some((&content[start..offset], &content[offset + line.len()..]));
        }
        offset += line.len();
    }

    None
}

/// Body of a document with any front matter removed
pub fn strip_front_matter(content: &str) -> &str {
    split_front_matter(content)
        .map(|(_, body)| body)
        .unwrap_or(content)
}

/// Parse a post file. `rel_path` is used for the default slug and errors.
pub fn parse_post(rel_path: &Path, content: &str) -> Result<Post> {
    let invalid = |message: String| QuireError::FrontMatter {
        path: rel_path.to_path_buf(),
        message,
    };

    let (block, body) = split_front_matter(content)
        .ok_or_else(|| invalid("missing '+++' front matter block".to_string()))?;

    let raw: RawFrontMatter = toml::from_str(block).map_err(|e| invalid(e.to_string()))?;

    let title = raw
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| invalid("missing title".to_string()))?;

    let slug = match raw.slug {
        Some(slug) => slug,
        None => rel_path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(str::to_string)
            .ok_or_else(|| invalid("cannot derive slug from file name".to_string()))?,
    };

    let date = raw.date.as_ref().map(parse_date).transpose().map_err(invalid)?;

    Ok(Post {
        slug,
        title,
        tags: raw.tags,
        date,
        description: raw.description,
        published: raw.published.unwrap_or(true) && !raw.draft.unwrap_or(false),
        body: body.to_string(),
        source: rel_path.to_path_buf(),
    })
}

fn parse_date(value: &toml::Value) -> std::result::Result<NaiveDate, String> {
    match value {
        toml::Value::Datetime(dt) => {
            let date = dt
                .date
                .ok_or_else(|| format!("date '{}' has no calendar date", dt))?;
            NaiveDate::from_ymd_opt(date.year as i32, date.month as u32, date.day as u32)
                .ok_or_else(|| format!("date '{}' is out of range", dt))
        }
        toml::Value::String(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| format!("Invalid date format '{}': {} (expected YYYY-MM-DD)", s, e)),
        other => Err(format!(
            "date must be a TOML date or a \"YYYY-MM-DD\" string, found {}",
            other.type_str()
        )),
    }
}
