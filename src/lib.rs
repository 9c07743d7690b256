//! mdblog: a static blog generator for Markdown posts
//!
//! Converts a directory of Markdown documents into a themed blog:
//! per-post HTML pages, an index page, a sitemap, an RSS feed, and a
//! robots.txt.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

use anyhow::Result;
use std::path::Path;

/// The main blog application
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory (the site root)
    pub base_dir: std::path::PathBuf,
    /// Posts source directory
    pub posts_dir: std::path::PathBuf,
    /// Output directory for generated pages
    pub output_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let posts_dir = base_dir.join(&config.posts_dir);
        let output_dir = base_dir.join(&config.blog_dir);

        Ok(Self {
            config,
            base_dir,
            posts_dir,
            output_dir,
        })
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Remove generated artifacts
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<()> {
        commands::new::run(self, title)
    }
}
