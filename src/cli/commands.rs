//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "Table of contents and tag tools for markdown blogs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new site (writes quire.toml)
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Content directory, relative to the site root (default: posts)
        #[arg(long)]
        content_dir: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set (e.g., popular_limit, toc.max_level)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Print the table of contents of a markdown file
    Toc {
        /// Markdown or MDX file
        file: PathBuf,

        /// Shallowest heading level to include (1-6)
        #[arg(long)]
        min_level: Option<u8>,

        /// Deepest heading level to include (1-6)
        #[arg(long)]
        max_level: Option<u8>,

        /// Ignore headings inside fenced code blocks
        #[arg(long)]
        skip_code_fences: bool,

        /// Strip inline markdown from heading labels
        #[arg(long)]
        strip_markup: bool,
    },

    /// List tags with their slugs and post counts
    Tags {
        /// Only show the N most used tags (default: popular_limit from config)
        #[arg(short, long, value_name = "N", num_args = 0..=1)]
        popular: Option<Option<usize>>,

        /// Sort order (count, name)
        #[arg(short, long, default_value = "count")]
        sort: String,
    },

    /// List posts carrying a tag
    Posts {
        /// Tag slug as shown by 'quire tags'
        #[arg(short, long)]
        tag: String,
    },
}
