//! Anchor slugs for heading ids

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Characters that never survive into an anchor: anything that is not a
/// word character, whitespace or a hyphen.
fn disallowed_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^\w\s-]").unwrap())
}

fn whitespace_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\s+").unwrap())
}

/// Normalize heading text into a URL-fragment-safe anchor.
///
/// Lowercases, drops characters outside word/whitespace/hyphen, turns each
/// whitespace run into a single `-` and trims hyphens from both ends.
/// Unicode letters are kept, so non-Latin headings still get an anchor.
pub fn anchor_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = disallowed_regex().replace_all(&lowered, "");
    let hyphenated = whitespace_regex().replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Issues unique anchors for a single document.
///
/// The first occurrence of a slug is returned as-is; later occurrences get
/// `-1`, `-2`, ... appended, skipping any candidate that was already issued.
#[derive(Debug, Default, Clone)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug `text` and reserve the result.
    pub fn slug(&mut self, text: &str) -> String {
        self.reserve(anchor_slug(text))
    }

    /// Forget every issued slug.
    pub fn reset(&mut self) {
        self.occurrences.clear();
    }

    fn reserve(&mut self, base: String) -> String {
        let mut result = base.clone();

        while self.occurrences.contains_key(&result) {
            let n = {
                let counter = self.occurrences.entry(base.clone()).or_insert(0);
                *counter += 1;
                *counter
            };
            result = format!("{}-{}", base, n);
        }

        self.occurrences.insert(result.clone(), 0);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::{
        prelude::*,
        test_runner::{Config, TestRunner},
    };

    #[test]
    fn test_anchor_slug_basic() {
        assert_eq!(anchor_slug("Hello World"), "hello-world");
        assert_eq!(anchor_slug("  Spaced   Out  "), "spaced-out");
        assert_eq!(anchor_slug("What's new?"), "whats-new");
        assert_eq!(anchor_slug("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn test_anchor_slug_strips_before_collapsing() {
        // "&" is removed first, leaving a single whitespace run
        assert_eq!(anchor_slug("Rust & Go"), "rust-go");
        // existing hyphens are kept next to the collapsed run
        assert_eq!(anchor_slug("a - b"), "a---b");
    }

    #[test]
    fn test_anchor_slug_keeps_unicode_letters() {
        assert_eq!(anchor_slug("Héllo Wörld"), "héllo-wörld");
        assert_eq!(anchor_slug("시작하기 가이드"), "시작하기-가이드");
    }

    #[test]
    fn test_anchor_slug_empty() {
        assert_eq!(anchor_slug(""), "");
        assert_eq!(anchor_slug("!!!"), "");
        assert_eq!(anchor_slug("--"), "");
    }

    #[test]
    fn test_slugger_suffixes_duplicates() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Title"), "title");
        assert_eq!(slugger.slug("Title"), "title-1");
        assert_eq!(slugger.slug("title"), "title-2");
    }

    #[test]
    fn test_slugger_skips_taken_suffix() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("a"), "a");
        assert_eq!(slugger.slug("a-1"), "a-1");
        assert_eq!(slugger.slug("a"), "a-2");
        assert_eq!(slugger.slug("a-1"), "a-1-1");
    }

    #[test]
    fn test_slugger_reset() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Intro"), "intro");
        slugger.reset();
        assert_eq!(slugger.slug("Intro"), "intro");
    }

    #[test]
    fn test_anchor_slug_idempotent() {
        let mut runner = TestRunner::new(Config {
            failure_persistence: None,
            ..Config::default()
        });
        runner
            .run(&".*", |input| {
                let once = anchor_slug(&input);
                prop_assert_eq!(anchor_slug(&once), once.clone());
                prop_assert!(!once.contains(char::is_whitespace));
                Ok(())
            })
            .unwrap();
    }
}
