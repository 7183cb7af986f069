//! Error types for quire

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quire
#[derive(Debug, Error)]
pub enum QuireError {
    #[error("Not a quire site: {0}")]
    NotQuireSite(PathBuf),

    #[error("Invalid front matter in {path}: {message}")]
    FrontMatter { path: PathBuf, message: String },

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl QuireError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuireError::NotQuireSite(_) => 2,
            QuireError::FrontMatter { .. } => 3,
            QuireError::TagNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuireError::NotQuireSite(path) => {
                format!(
                    "Not a quire site: {}\n\n\
                    Suggestions:\n\
                    • Run 'quire init' in this directory to create quire.toml\n\
                    • Navigate to a directory containing quire.toml\n\
                    • Set QUIRE_ROOT environment variable to your site path",
                    path.display()
                )
            }
            QuireError::FrontMatter { path, message } => {
                format!(
                    "Invalid front matter in {}: {}\n\n\
                    Front matter is TOML between '+++' lines, for example:\n\
                    +++\n\
                    title = \"Hello\"\n\
                    date = 2025-01-17\n\
                    tags = [\"rust\", \"notes\"]\n\
                    +++",
                    path.display(),
                    message
                )
            }
            QuireError::TagNotFound(tag) => {
                format!(
                    "No posts found for tag: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'quire tags' to see available tags and their slugs\n\
                    • Pass the tag slug (e.g., 'my-tag'), not the display name\n\
                    • Drafts are hidden unless include_drafts is enabled",
                    tag
                )
            }
            QuireError::Config(msg) => {
                if msg.contains("level") {
                    format!(
                        "{}\n\n\
                        Heading levels range from 1 to 6 and min_level must not exceed max_level\n\
                        Example: quire config toc.max_level 3",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuireError
pub type Result<T> = std::result::Result<T, QuireError>;
