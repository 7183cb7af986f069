//! quire - Table of contents and tag tools for markdown blogs
//!
//! Extracts collision-free heading anchors from markdown and aggregates
//! post tags into counts, slugs and filtered post lists.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuireError;
