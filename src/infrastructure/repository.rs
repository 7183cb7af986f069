//! File system repository

use crate::domain::post::{published_posts, sort_by_date_desc};
use crate::domain::Post;
use crate::error::{QuireError, Result};
use crate::infrastructure::config::CONFIG_FILE;
use crate::infrastructure::front_matter::{parse_post, strip_front_matter};
use crate::infrastructure::Config;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Environment variable overriding site discovery
pub const ROOT_ENV: &str = "QUIRE_ROOT";

/// Abstract repository for site operations
pub trait SiteRepository {
    /// Get the root directory of this site
    fn root(&self) -> &Path;

    /// Load configuration from quire.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to quire.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if quire.toml exists
    fn is_initialized(&self) -> bool;

    /// Prepare a new site: fails if one already exists
    fn initialize(&self) -> Result<()>;

    /// Load every post under the configured content directory
    fn load_posts(&self, config: &Config) -> Result<Vec<Post>>;
}

/// File system implementation of SiteRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the site root by walking up from the current directory.
    /// QUIRE_ROOT takes precedence over discovery.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_config(&path) {
                debug!(root = %path.display(), "using {}", ROOT_ENV);
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuireError::Config(format!(
                    "{} is set to '{}' but no {} found there. \
                    Run 'quire init' in that directory or unset {}.",
                    ROOT_ENV,
                    path.display(),
                    CONFIG_FILE,
                    ROOT_ENV
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config(&current) {
                debug!(root = %current.display(), "discovered site root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuireError::NotQuireSite(start.to_path_buf())),
            }
        }
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }

    /// Create a directory (and parents) relative to the site root.
    pub fn create_dir_all(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(self.root.join(dir)).map_err(QuireError::Io)
    }

    /// Read a markdown file and return its body without front matter.
    ///
    /// Relative paths are resolved against the process working directory,
    /// not the site root.
    pub fn read_document(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)?;
        Ok(strip_front_matter(&content).to_string())
    }
}

impl SiteRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(QuireError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load_posts(&self, config: &Config) -> Result<Vec<Post>> {
        let content_root = self.root.join(&config.content_dir);
        if !content_root.is_dir() {
            return Err(QuireError::Config(format!(
                "Content directory not found: {}",
                content_root.display()
            )));
        }

        let walker = WalkDir::new(&content_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        let mut posts = Vec::new();
        let mut seen_slugs = HashSet::new();

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() || !is_markdown(entry.path()) {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&content_root)
                .unwrap_or(entry.path())
                .to_path_buf();
            let content = fs::read_to_string(entry.path())?;
            let post = parse_post(&rel, &content)?;

            if !seen_slugs.insert(post.slug.clone()) {
                warn!(slug = %post.slug, path = %rel.display(), "duplicate post slug");
            }
            debug!(slug = %post.slug, tags = post.tags.len(), "loaded post");
            posts.push(post);
        }

        let loaded = posts.len();
        if !config.include_drafts {
            posts = published_posts(posts);
        }
        sort_by_date_desc(&mut posts);

        info!(
            loaded,
            kept = posts.len(),
            dir = %content_root.display(),
            "loaded posts"
        );
        Ok(posts)
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("mdx"))
}
