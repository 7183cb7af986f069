//! Heading extraction from raw markdown
//!
//! The scan is line based: any line made of one to six `#` characters,
//! horizontal whitespace and a non-blank label is a heading. Fenced code
//! blocks are not recognised unless [`HeadingExtractor::skip_code_fences`]
//! is enabled, so a `# comment` inside a shell snippet shows up in the
//! table of contents by default.
//!
//! # Examples
//!
//! ```
//! use quire::domain::headings::extract_headings;
//!
//! let headings = extract_headings("# Title\n\nSome text\n\n## Title\n");
//! assert_eq!(headings[0].id, "title");
//! assert_eq!(headings[1].id, "title-1");
//! assert_eq!(headings[1].level, 2);
//! ```

use super::Slugger;
use pulldown_cmark::{Event, Parser as MdParser};
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn heading_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(#{1,6})[ \t]+(.+)$").unwrap())
}

fn fence_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^ {0,3}(`{3,}|~{3,})(.*)$").unwrap())
}

/// Label prefixes that pulldown-cmark would read as a block construct
fn block_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?:[>#]|[-+*](?:[ \t]|$)|[-*_](?:[ \t]*[-*_]){2,}[ \t]*$|`{3}|~{3})").unwrap()
    })
}

fn ordered_list_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{1,9})[.)](?:[ \t]|$)").unwrap())
}

/// A single table-of-contents entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Anchor id, unique within one extraction
    pub id: String,
    /// Heading label
    pub text: String,
    /// Heading depth (1-6)
    pub level: u8,
}

impl HeadingEntry {
    pub fn new(id: impl Into<String>, text: impl Into<String>, level: u8) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            level,
        }
    }

    /// Fragment link for this heading (`#id`)
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Configurable heading scanner.
///
/// The default configuration is exactly [`extract_headings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingExtractor {
    skip_code_fences: bool,
    strip_markup: bool,
    min_level: u8,
    max_level: u8,
}

impl Default for HeadingExtractor {
    fn default() -> Self {
        Self {
            skip_code_fences: false,
            strip_markup: false,
            min_level: 1,
            max_level: 6,
        }
    }
}

impl HeadingExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore `#` lines inside ``` and ~~~ fences.
    ///
    /// A fence closes on a bare run of its own character at least as long
    /// as the opening run.
    pub fn skip_code_fences(mut self, skip: bool) -> Self {
        self.skip_code_fences = skip;
        self
    }

    /// Reduce labels to their plain text (emphasis, links, code spans).
    pub fn strip_markup(mut self, strip: bool) -> Self {
        self.strip_markup = strip;
        self
    }

    /// Only return headings with `min <= level <= max`.
    ///
    /// Headings outside the range still reserve their slug, so ids match
    /// the ones an unfiltered extraction would produce.
    pub fn levels(mut self, min: u8, max: u8) -> Self {
        self.min_level = min;
        self.max_level = max;
        self
    }

    /// Extract headings in document order
    pub fn extract(&self, markdown: &str) -> Vec<HeadingEntry> {
        let mut slugger = Slugger::new();
        // marker character and run length of the open fence
        let mut open_fence: Option<(char, usize)> = None;
        let mut headings = Vec::new();

        for line in markdown.lines() {
            if self.skip_code_fences {
                if let Some(cap) = fence_regex().captures(line) {
                    let marker = cap[1].chars().next().unwrap_or('`');
                    let len = cap[1].len();
                    match open_fence {
                        None => open_fence = Some((marker, len)),
                        Some((open, open_len))
                            if open == marker && len >= open_len && cap[2].trim().is_empty() =>
                        {
                            open_fence = None
                        }
                        Some(_) => {}
                    }
                    continue;
                }
                if open_fence.is_some() {
                    continue;
                }
            }

            let Some(cap) = heading_regex().captures(line) else {
                continue;
            };

            let label = cap[2].trim();
            if label.is_empty() {
                continue;
            }

            let text = if self.strip_markup {
                plain_text(label)
            } else {
                label.to_string()
            };
            if text.is_empty() {
                continue;
            }

            let level = cap[1].len() as u8;
            let id = slugger.slug(&text);

            if (self.min_level..=self.max_level).contains(&level) {
                headings.push(HeadingEntry { id, text, level });
            }
        }

        headings
    }
}

/// Extract table-of-contents entries from raw markdown.
///
/// Every call starts with a fresh [`Slugger`], so two documents never share
/// an id space.
pub fn extract_headings(markdown: &str) -> Vec<HeadingEntry> {
    HeadingExtractor::default().extract(markdown)
}

/// Render an inline label and keep only its text.
fn plain_text(label: &str) -> String {
    let mut out = String::new();
    for event in MdParser::new(&escape_block_marker(label)) {
        match event {
            Event::Text(text) | Event::Code(text) => out.push_str(&text),
            Event::SoftBreak | Event::HardBreak => out.push(' '),
            _ => {}
        }
    }
    out.trim().to_string()
}

/// Backslash-escape a leading list, quote, heading, rule or fence marker so
/// the label parses as a single paragraph.
fn escape_block_marker(label: &str) -> Cow<'_, str> {
    if let Some(cap) = ordered_list_regex().captures(label) {
        let digits = cap[1].len();
        return Cow::Owned(format!("{}\\{}", &label[..digits], &label[digits..]));
    }
    if block_marker_regex().is_match(label) {
        return Cow::Owned(format!("\\{}", label));
    }
    Cow::Borrowed(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{
        prelude::*,
        test_runner::{Config, TestRunner},
    };
    use std::collections::HashSet;

    #[test]
    fn test_duplicate_titles_across_levels() {
        let headings = extract_headings("# Title\n\nSome text\n\n## Title\n");
        assert_eq!(
            headings,
            vec![
                HeadingEntry::new("title", "Title", 1),
                HeadingEntry::new("title-1", "Title", 2),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_headings("").is_empty());
        assert!(extract_headings("just a paragraph\n\nand another").is_empty());
    }

    #[test]
    fn test_all_levels() {
        let markdown = "# one\n## two\n### three\n#### four\n##### five\n###### six\n";
        let levels: Vec<u8> = extract_headings(markdown).iter().map(|h| h.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_seven_hashes_is_not_a_heading() {
        assert!(extract_headings("####### too deep").is_empty());
    }

    #[test]
    fn test_requires_whitespace_after_marker() {
        assert!(extract_headings("#hashtag").is_empty());
        assert_eq!(extract_headings("#\tTabbed")[0].text, "Tabbed");
    }

    #[test]
    fn test_blank_label_skipped() {
        assert!(extract_headings("#   \n##\t\n").is_empty());
    }

    #[test]
    fn test_bare_marker_does_not_join_next_line() {
        let headings = extract_headings("#\nnot a heading\n## Real\n");
        assert_eq!(headings, vec![HeadingEntry::new("real", "Real", 2)]);
    }

    #[test]
    fn test_indented_marker_is_not_a_heading() {
        assert!(extract_headings("  # indented").is_empty());
    }

    #[test]
    fn test_label_is_trimmed() {
        let headings = extract_headings("##   Spaced label   \r\n");
        assert_eq!(headings[0].text, "Spaced label");
        assert_eq!(headings[0].id, "spaced-label");
    }

    #[test]
    fn test_markup_kept_by_default() {
        let headings = extract_headings("## Using `cargo` **fast**");
        assert_eq!(headings[0].text, "Using `cargo` **fast**");
        assert_eq!(headings[0].id, "using-cargo-fast");
    }

    #[test]
    fn test_code_fences_not_special_by_default() {
        let markdown = "# Setup\n\n```sh\n# install deps\nmake\n```\n";
        let headings = extract_headings(markdown);
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].text, "install deps");
    }

    #[test]
    fn test_skip_code_fences() {
        let markdown = "# Setup\n\n```sh\n# install deps\n```\n\n~~~\n## inside tilde\n~~~\n\n## After\n";
        let headings = HeadingExtractor::new()
            .skip_code_fences(true)
            .extract(markdown);
        assert_eq!(
            headings,
            vec![
                HeadingEntry::new("setup", "Setup", 1),
                HeadingEntry::new("after", "After", 2),
            ]
        );
    }

    #[test]
    fn test_skip_code_fences_mismatched_marker_stays_open() {
        let markdown = "```\n~~~\n# hidden\n```\n# shown\n";
        let headings = HeadingExtractor::new()
            .skip_code_fences(true)
            .extract(markdown);
        assert_eq!(headings, vec![HeadingEntry::new("shown", "shown", 1)]);
    }

    #[test]
    fn test_skip_code_fences_longer_fence_wraps_shorter() {
        let markdown = "````md\n```\n# hidden\n````\n# shown\n";
        let headings = HeadingExtractor::new()
            .skip_code_fences(true)
            .extract(markdown);
        assert_eq!(headings, vec![HeadingEntry::new("shown", "shown", 1)]);
    }

    #[test]
    fn test_skip_code_fences_info_string_does_not_close() {
        let markdown = "```\n```rust\n# hidden\n```\n# shown\n";
        let headings = HeadingExtractor::new()
            .skip_code_fences(true)
            .extract(markdown);
        assert_eq!(headings, vec![HeadingEntry::new("shown", "shown", 1)]);
    }

    #[test]
    fn test_strip_markup_keeps_block_markers() {
        let headings = HeadingExtractor::new()
            .strip_markup(true)
            .extract("## 1. Introduction\n## - Dash\n## > Quoted\n## 2) *Next*\n## ---\n");
        let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
        assert_eq!(texts, vec!["1. Introduction", "- Dash", "> Quoted", "2) Next", "---"]);
        assert_eq!(headings[0].id, "1-introduction");
    }

    #[test]
    fn test_strip_markup_keeps_leading_emphasis() {
        let headings = HeadingExtractor::new()
            .strip_markup(true)
            .extract("# *Fast* start\n# **Bold**\n");
        assert_eq!(headings[0].text, "Fast start");
        assert_eq!(headings[1].text, "Bold");
    }

    #[test]
    fn test_strip_markup() {
        let headings = HeadingExtractor::new()
            .strip_markup(true)
            .extract("## Using `cargo` with [docs](https://docs.rs) *fast*");
        assert_eq!(headings[0].text, "Using cargo with docs fast");
        assert_eq!(headings[0].id, "using-cargo-with-docs-fast");
    }

    #[test]
    fn test_levels_filter_keeps_ids_stable() {
        let markdown = "# Intro\n## Intro\n### Details\n";
        let headings = HeadingExtractor::new().levels(2, 3).extract(markdown);
        assert_eq!(
            headings,
            vec![
                HeadingEntry::new("intro-1", "Intro", 2),
                HeadingEntry::new("details", "Details", 3),
            ]
        );
    }

    #[test]
    fn test_calls_are_independent() {
        let first = extract_headings("# Intro\n# Intro\n");
        let second = extract_headings("# Intro\n");
        assert_eq!(first[1].id, "intro-1");
        assert_eq!(second[0].id, "intro");
    }

    #[test]
    fn test_anchor() {
        assert_eq!(HeadingEntry::new("intro", "Intro", 1).anchor(), "#intro");
    }

    #[test]
    fn test_heading_count_and_unique_ids() {
        let mut runner = TestRunner::new(Config {
            cases: 64,
            failure_persistence: None,
            ..Config::default()
        });

        runner
            .run(
                &proptest::collection::vec((1usize..=6, "[A-Za-z][A-Za-z0-9 ]{0,12}"), 0..8),
                |items| {
                    let mut markdown = String::new();
                    for (level, title) in &items {
                        markdown.push_str(&"#".repeat(*level));
                        markdown.push(' ');
                        markdown.push_str(title);
                        markdown.push_str("\n\nbody text\n\n");
                    }

                    let headings = extract_headings(&markdown);
                    prop_assert_eq!(headings.len(), items.len());

                    let mut ids = HashSet::new();
                    for (heading, (level, title)) in headings.iter().zip(items.iter()) {
                        prop_assert_eq!(heading.level as usize, *level);
                        prop_assert_eq!(heading.text.as_str(), title.trim());
                        prop_assert!(ids.insert(heading.id.clone()), "duplicate id {}", heading.id);
                    }
                    Ok(())
                },
            )
            .unwrap();
    }
}
