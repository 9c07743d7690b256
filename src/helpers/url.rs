//! URL construction helpers

use crate::config::SiteConfig;

/// Base site URL without a trailing slash
pub fn site_root(config: &SiteConfig) -> &str {
    config.url.trim_end_matches('/')
}

/// Absolute URL of the blog directory, with trailing slash
pub fn blog_root(config: &SiteConfig) -> String {
    format!("{}/{}/", site_root(config), config.blog_dir)
}

/// Absolute URL of the blog index page
pub fn index_url(config: &SiteConfig) -> String {
    format!(
        "{}/{}/index.{}",
        site_root(config),
        config.blog_dir,
        config.page_ext
    )
}

/// Absolute URL of a post page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    format!(
        "{}/{}/{}.{}",
        site_root(config),
        config.blog_dir,
        slug,
        config.page_ext
    )
}
