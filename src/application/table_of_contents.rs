//! Table of contents use case

use crate::domain::HeadingEntry;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TocConfig};
use std::path::Path;
use tracing::debug;

/// Command-line overrides applied on top of the site's `[toc]` settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TocOptions {
    pub min_level: Option<u8>,
    pub max_level: Option<u8>,
    pub skip_code_fences: bool,
    pub strip_markup: bool,
}

impl TocOptions {
    /// Merge overrides into `base`. Boolean flags can only switch a setting on.
    pub fn apply(&self, base: TocConfig) -> Result<TocConfig> {
        let merged = TocConfig {
            min_level: self.min_level.unwrap_or(base.min_level),
            max_level: self.max_level.unwrap_or(base.max_level),
            skip_code_fences: base.skip_code_fences || self.skip_code_fences,
            strip_markup: base.strip_markup || self.strip_markup,
        };
        merged.validate()?;
        Ok(merged)
    }
}

/// Extract the table of contents of a markdown file.
pub fn table_of_contents(
    path: &Path,
    base: TocConfig,
    options: TocOptions,
) -> Result<Vec<HeadingEntry>> {
    let toc = options.apply(base)?;
    let body = FileSystemRepository::read_document(path)?;
    let headings = toc.extractor().extract(&body);
    debug!(path = %path.display(), count = headings.len(), "extracted headings");
    Ok(headings)
}
