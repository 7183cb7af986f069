//! Tag slugs and their URL form

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::OnceLock;

/// Everything outside ASCII word characters, whitespace and hyphen
fn disallowed_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^A-Za-z0-9_\s-]").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Unreserved URL characters stay readable in tag routes.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Normalize a tag name into its routing slug.
///
/// Total and idempotent. Names made only of non-ASCII characters slug to an
/// empty string; [`super::posts_by_tag`] falls back to the decoded literal
/// name for those.
///
/// Surrounding whitespace is trimmed before normalizing, so `" a "` slugs
/// to `"a"`. The usual lowercase, strip, collapse order without the trim
/// would give `"-a-"`.
///
/// # Examples
///
/// ```
/// use quire::domain::tags::slugify;
///
/// assert_eq!(slugify("My Tag"), "my-tag");
/// assert_eq!(slugify("C++ & Rust"), "c-rust");
/// assert_eq!(slugify(" a "), "a");
/// ```
pub fn slugify(tag: &str) -> String {
    let lowered = tag.trim().to_lowercase();
    let stripped = disallowed_regex().replace_all(&lowered, "");
    whitespace_regex().replace_all(&stripped, "-").into_owned()
}

/// Percent-encode a slug (or raw tag name) for use as a URL path segment.
pub fn encode_tag_slug(slug: &str) -> String {
    utf8_percent_encode(slug, PATH_SEGMENT).to_string()
}

/// Decode a routed tag slug back to a display label.
///
/// Inverse of [`encode_tag_slug`]. For plain lowercase names this gives back
/// the name; characters dropped by [`slugify`] cannot be recovered.
pub fn tag_name_from_slug(slug: &str) -> String {
    percent_decode_str(slug).decode_utf8_lossy().into_owned()
}
