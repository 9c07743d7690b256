//! RSS feed generation
//!
//! Builds an RSS 2.0 feed of the most recent posts.

use anyhow::{anyhow, Context, Result};
use chrono::Local;
use rss::validation::Validate;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};
use std::fs;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::{blog_root, post_url};
use crate::Blog;

/// Hard cap on feed items, most recent first
const RSS_ITEM_LIMIT: usize = 10;

/// Build and write rss.xml into the blog directory
pub fn build_rss(blog: &Blog, posts: &[Post]) -> Result<()> {
    let xml = feed_xml(&blog.config, posts)?;
    let path = blog.output_dir.join("rss.xml");
    fs::write(&path, xml)
        .with_context(|| format!("Failed to write RSS feed to {:?}", path))?;
    tracing::info!("Generated rss.xml");
    Ok(())
}

/// Render the feed to an XML string
fn feed_xml(config: &SiteConfig, posts: &[Post]) -> Result<String> {
    let now = Local::now().to_rfc2822();

    let items: Vec<rss::Item> = posts
        .iter()
        .take(RSS_ITEM_LIMIT)
        .map(|post| post_to_item(config, post))
        .collect();

    let channel = ChannelBuilder::default()
        .title(config.title.clone())
        .description(config.description.clone())
        .link(blog_root(config))
        .language(config.language.clone())
        .pub_date(now.clone())
        .last_build_date(now)
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| anyhow!("RSS validation failed: {e}"))?;
    Ok(channel.to_string())
}

/// Convert a post into a feed item
fn post_to_item(config: &SiteConfig, post: &Post) -> rss::Item {
    let link = post_url(config, &post.slug);
    ItemBuilder::default()
        .title(post.title.clone())
        .description(post.description.clone())
        .link(link.clone())
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .pub_date(post.date.to_rfc2822())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use indexmap::IndexMap;
    use std::path::PathBuf;

    fn make_post(slug: &str, day: u32) -> Post {
        Post {
            slug: slug.to_string(),
            source: PathBuf::from(format!("{}.md", slug)),
            title: format!("Title of {}", slug),
            date: chrono::Local.with_ymd_and_hms(2024, 3, day, 9, 0, 0).unwrap(),
            description: format!("Summary of {}", slug),
            tags: Vec::new(),
            image: None,
            content: String::new(),
            raw: String::new(),
            extra: IndexMap::new(),
        }
    }

    // Newest first, like the loader produces
    fn collection(n: u32) -> Vec<Post> {
        (1..=n).rev().map(|day| make_post(&format!("post-{}", day), day)).collect()
    }

    #[test]
    fn test_item_fields() {
        let config = SiteConfig::default();
        let item = post_to_item(&config, &make_post("hello", 5));

        assert_eq!(item.title(), Some("Title of hello"));
        assert_eq!(item.description(), Some("Summary of hello"));
        assert_eq!(item.link(), Some("https://example.com/blog/hello.html"));

        let guid = item.guid().unwrap();
        assert!(guid.is_permalink());
        assert_eq!(guid.value(), "https://example.com/blog/hello.html");

        // RFC 2822 style publication date
        assert!(item.pub_date().unwrap().contains("Mar 2024"));
    }

    #[test]
    fn test_channel_metadata() {
        let config = SiteConfig::default();
        let xml = feed_xml(&config, &collection(2)).unwrap();

        assert!(xml.contains("<rss version=\"2.0\""));
        assert!(xml.contains(&format!("<title>{}</title>", config.title)));
        assert!(xml.contains("<link>https://example.com/blog/</link>"));
        assert!(xml.contains("<language>en-US</language>"));
        assert!(xml.contains("<lastBuildDate>"));
    }

    #[test]
    fn test_item_cap_at_ten() {
        let config = SiteConfig::default();
        let posts = collection(12);
        let xml = feed_xml(&config, &posts).unwrap();

        assert_eq!(xml.matches("<item>").count(), 10);
        // The ten most recent survive; the two oldest are dropped
        assert!(xml.contains("Title of post-12"));
        assert!(xml.contains("Title of post-3"));
        assert!(!xml.contains("Title of post-2</title>"));
        assert!(!xml.contains("Title of post-1</title>"));
    }

    #[test]
    fn test_empty_collection_validates() {
        let config = SiteConfig::default();
        let xml = feed_xml(&config, &[]).unwrap();
        assert!(xml.contains("<channel>"));
        assert!(!xml.contains("<item>"));
    }
}
