//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub tagline: String,
    pub description: String,
    /// Feed language code
    pub language: String,

    // URL
    pub url: String,

    // Directory
    /// Output directory for generated pages, also the URL path segment
    pub blog_dir: String,
    /// Source directory scanned for markdown posts
    pub posts_dir: String,

    // Writing
    pub page_ext: String,

    // Theme
    pub profile_image: String,
    /// Open Graph image used when a post does not set one
    pub default_og_image: String,
    /// Number of entries in the sidebar recent-posts list
    pub recent_posts: usize,

    // Code highlighting
    pub highlight_theme: String,
    pub highlight_line_numbers: bool,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Blog".to_string(),
            author: "John Doe".to_string(),
            tagline: "Software Engineer".to_string(),
            description: "Latest articles and insights from my software engineering journey"
                .to_string(),
            language: "en-US".to_string(),

            url: "https://example.com".to_string(),

            blog_dir: "blog".to_string(),
            posts_dir: "blog/posts".to_string(),

            page_ext: "html".to_string(),

            profile_image: "profile.jpg".to_string(),
            default_og_image: "https://example.com/profile.jpg".to_string(),
            recent_posts: 5,

            highlight_theme: "base16-ocean.dark".to_string(),
            highlight_line_numbers: true,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
