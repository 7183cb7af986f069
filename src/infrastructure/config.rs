//! Configuration management

use crate::domain::tags::DEFAULT_POPULAR_LIMIT;
use crate::domain::HeadingExtractor;
use crate::error::{QuireError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the site configuration file
pub const CONFIG_FILE: &str = "quire.toml";

/// Site configuration stored in `quire.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding posts, relative to the site root
    pub content_dir: PathBuf,
    /// Load posts marked as drafts
    pub include_drafts: bool,
    /// Default size of the popular tag list
    pub popular_limit: usize,
    pub toc: TocConfig,
}

/// Table-of-contents settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    pub min_level: u8,
    pub max_level: u8,
    pub skip_code_fences: bool,
    pub strip_markup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            content_dir: PathBuf::from("posts"),
            include_drafts: false,
            popular_limit: DEFAULT_POPULAR_LIMIT,
            toc: TocConfig::default(),
        }
    }
}

impl Default for TocConfig {
    fn default() -> Self {
        TocConfig {
            min_level: 1,
            max_level: 6,
            skip_code_fences: false,
            strip_markup: false,
        }
    }
}

impl TocConfig {
    /// Check that the level range is inside 1..=6 and not inverted
    pub fn validate(&self) -> Result<()> {
        for level in [self.min_level, self.max_level] {
            if !(1..=6).contains(&level) {
                return Err(QuireError::Config(format!(
                    "Invalid heading level: {}",
                    level
                )));
            }
        }
        if self.min_level > self.max_level {
            return Err(QuireError::Config(format!(
                "Invalid heading level range: min_level {} is greater than max_level {}",
                self.min_level, self.max_level
            )));
        }
        Ok(())
    }

    /// Build the heading extractor described by these settings
    pub fn extractor(&self) -> HeadingExtractor {
        HeadingExtractor::new()
            .skip_code_fences(self.skip_code_fences)
            .strip_markup(self.strip_markup)
            .levels(self.min_level, self.max_level)
    }
}

impl Config {
    /// Load config from quire.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QuireError::NotQuireSite(path.to_path_buf())
            } else {
                QuireError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| QuireError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;
        config.toc.validate()?;

        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to quire.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        self.toc.validate()?;

        let contents = toml::to_string_pretty(self)
            .map_err(|e| QuireError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path.join(CONFIG_FILE), contents)?;

        Ok(())
    }
}
