//! Config management use case

use crate::error::{QuireError, Result};
use crate::infrastructure::{Config, FileSystemRepository, SiteRepository};
use std::path::PathBuf;
use std::str::FromStr;

/// Keys accepted by `quire config`
pub const CONFIG_KEYS: [&str; 7] = [
    "content_dir",
    "include_drafts",
    "popular_limit",
    "toc.min_level",
    "toc.max_level",
    "toc.skip_code_fences",
    "toc.strip_markup",
];

fn unknown_key(key: &str) -> QuireError {
    QuireError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| QuireError::Config(format!("Invalid value for {}: '{}'", key, value)))
}

/// Service for managing site configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        Self::read_key(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "content_dir" => config.content_dir = PathBuf::from(value),
            "include_drafts" => config.include_drafts = parse_value(key, value)?,
            "popular_limit" => config.popular_limit = parse_value(key, value)?,
            "toc.min_level" => config.toc.min_level = parse_value(key, value)?,
            "toc.max_level" => config.toc.max_level = parse_value(key, value)?,
            "toc.skip_code_fences" => config.toc.skip_code_fences = parse_value(key, value)?,
            "toc.strip_markup" => config.toc.strip_markup = parse_value(key, value)?,
            _ => return Err(unknown_key(key)),
        }

        // save_config validates the level range
        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values as (key, value) pairs
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.repository.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|key| Self::read_key(&config, key).map(|value| (*key, value)))
            .collect()
    }

    fn read_key(config: &Config, key: &str) -> Result<String> {
        let value = match key {
            "content_dir" => config.content_dir.display().to_string(),
            "include_drafts" => config.include_drafts.to_string(),
            "popular_limit" => config.popular_limit.to_string(),
            "toc.min_level" => config.toc.min_level.to_string(),
            "toc.max_level" => config.toc.max_level.to_string(),
            "toc.skip_code_fences" => config.toc.skip_code_fences.to_string(),
            "toc.strip_markup" => config.toc.strip_markup.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service() -> (TempDir, ConfigService) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.save_config(&Config::default()).unwrap();
        (temp, ConfigService::new(repo))
    }

    #[test]
    fn test_get_and_set() {
        let (_temp, service) = service();
        assert_eq!(service.get("popular_limit").unwrap(), "10");

        service.set("popular_limit", "3").unwrap();
        service.set("toc.skip_code_fences", "true").unwrap();
        assert_eq!(service.get("popular_limit").unwrap(), "3");
        assert_eq!(service.get("toc.skip_code_fences").unwrap(), "true");
    }

    #[test]
    fn test_set_invalid_value() {
        let (_temp, service) = service();
        let err = service.set("include_drafts", "maybe").unwrap_err();
        assert!(err.to_string().contains("Invalid value for include_drafts"));
    }

    #[test]
    fn test_set_out_of_range_level_is_rejected() {
        let (_temp, service) = service();
        assert!(service.set("toc.max_level", "9").is_err());
        assert!(service.set("toc.min_level", "7").is_err());
        assert_eq!(service.get("toc.max_level").unwrap(), "6");
    }

    #[test]
    fn test_unknown_key() {
        let (_temp, service) = service();
        let err = service.get("editor").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'editor'"));
        assert!(service.set("editor", "vim").is_err());
    }

    #[test]
    fn test_list_covers_every_key() {
        let (_temp, service) = service();
        let entries = service.list().unwrap();
        let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, CONFIG_KEYS.to_vec());
    }
}
