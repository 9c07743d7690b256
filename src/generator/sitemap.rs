//! Sitemap generation
//!
//! Emits a sitemap.xml listing the fixed top-level pages plus one entry
//! per blog post:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/blog/hello.html</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>monthly</changefreq>
//!     <priority>0.6</priority>
//!   </url>
//! </urlset>
//! ```

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{index_url, post_url, site_root, ymd};
use crate::Blog;

/// XML namespace for sitemaps
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build and write sitemap.xml at the site root
pub fn build_sitemap(blog: &Blog, posts: &[Post]) -> Result<()> {
    let sitemap = Sitemap::from_posts(&blog.config, posts);
    let path = blog.base_dir.join("sitemap.xml");
    fs::write(&path, sitemap.into_xml())
        .with_context(|| format!("Failed to write sitemap to {:?}", path))?;
    tracing::info!("Generated sitemap.xml");
    Ok(())
}

/// Sitemap data structure
struct Sitemap {
    urls: Vec<UrlEntry>,
}

/// Single URL entry in the sitemap
struct UrlEntry {
    loc: String,
    /// Last modification date, YYYY-MM-DD
    lastmod: String,
    changefreq: &'static str,
    priority: &'static str,
}

impl Sitemap {
    /// Collect the fixed top-level pages plus one entry per post
    fn from_posts(config: &SiteConfig, posts: &[Post]) -> Self {
        let root = site_root(config);
        let today = ymd(&Local::now());

        let mut urls = vec![
            UrlEntry {
                loc: format!("{}/index.html", root),
                lastmod: today.clone(),
                changefreq: "daily",
                priority: "1.0",
            },
            UrlEntry {
                loc: format!("{}/privacy.html", root),
                lastmod: today.clone(),
                changefreq: "yearly",
                priority: "0.5",
            },
            UrlEntry {
                loc: format!("{}/terms.html", root),
                lastmod: today.clone(),
                changefreq: "yearly",
                priority: "0.5",
            },
            UrlEntry {
                loc: index_url(config),
                lastmod: today,
                changefreq: "weekly",
                priority: "0.8",
            },
        ];

        for post in posts {
            urls.push(UrlEntry {
                loc: post_url(config, &post.slug),
                lastmod: ymd(&post.date),
                changefreq: "monthly",
                priority: "0.6",
            });
        }

        Self { urls }
    }

    /// Generate the sitemap XML string
    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#));
        xml.push('\n');

        for entry in self.urls {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", entry.lastmod));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.changefreq
            ));
            xml.push_str(&format!("    <priority>{}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>");
        xml
    }
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
