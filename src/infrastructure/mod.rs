//! Infrastructure layer - Configuration and file system access

pub mod config;
pub mod front_matter;
pub mod repository;

pub use config::{Config, TocConfig};
pub use repository::{FileSystemRepository, SiteRepository};
