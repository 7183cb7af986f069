//! Initialize site use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, SiteRepository};
use std::path::{Path, PathBuf};
use tracing::info;

/// Initialize a new site at the specified path.
pub fn init(path: &Path, content_dir: Option<PathBuf>) -> Result<()> {
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Fails if quire.toml already exists
    repo.initialize()?;

    let mut config = Config::default();
    if let Some(dir) = content_dir {
        config.content_dir = dir;
    }

    repo.create_dir_all(&config.content_dir)?;
    repo.save_config(&config)?;
    info!(root = %path.display(), "initialized site");

    println!("Initialized quire site at {}", path.display());
    println!("Content directory: {}", config.content_dir.display());

    Ok(())
}
