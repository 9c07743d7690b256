//! Generator module - fills the theme templates and writes output files

pub mod rss;
pub mod sitemap;

use anyhow::{anyhow, Result};
use std::collections::BTreeSet;
use std::fs;

use crate::content::Post;
use crate::helpers::{full_date, index_url, post_url, site_root};
use crate::templates::{
    IndexPage, NavPost, PostCard, PostContext, PostPage, RecentPost, SiteContext, TemplateRenderer,
};
use crate::Blog;

/// Static site generator over the built-in theme
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        Ok(Self {
            blog: blog.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the blog index page
    pub fn generate_index(&self, posts: &[Post]) -> Result<()> {
        let cards = posts
            .iter()
            .map(|p| PostCard {
                title: p.title.clone(),
                href: self.page_name(&p.slug),
                date: full_date(&p.date),
                description: p.description.clone(),
                tags: p.tags.clone(),
            })
            .collect();

        let page = IndexPage {
            site: self.site_context(),
            posts: cards,
            categories: categories(posts),
        };

        let html = self.renderer.render_index(&page)?;
        let output_path = self.blog.output_dir.join(self.page_name("index"));
        fs::write(&output_path, html)
            .map_err(|e| anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::info!("Generated blog index: {:?}", output_path);

        Ok(())
    }

    /// Generate every individual post page
    pub fn generate_posts(&self, posts: &[Post]) -> Result<()> {
        for post in posts {
            self.generate_post(post, posts)?;
        }
        Ok(())
    }

    /// Generate a single post page
    fn generate_post(&self, post: &Post, posts: &[Post]) -> Result<()> {
        let config = &self.blog.config;

        // The current post is dropped from the slice rather than skipped
        // at render time, so a top-five post shows four recents
        let recent = posts
            .iter()
            .take(config.recent_posts)
            .filter(|p| p.slug != post.slug)
            .map(|p| RecentPost {
                title: p.title.clone(),
                href: self.page_name(&p.slug),
                date: full_date(&p.date),
            })
            .collect();

        let nav = |p: &Post| NavPost {
            title: p.title.clone(),
            href: self.page_name(&p.slug),
        };

        let page = PostPage {
            site: self.site_context(),
            post: PostContext {
                title: post.title.clone(),
                description: post.description.clone(),
                content: post.content.clone(),
                slug: post.slug.clone(),
                url: post_url(config, &post.slug),
                og_image: post
                    .image
                    .clone()
                    .unwrap_or_else(|| config.default_og_image.clone()),
                date: full_date(&post.date),
                tags: post.tags.clone(),
            },
            recent,
            categories: categories(posts),
            prev: post.prev(posts).map(nav),
            next: post.next(posts).map(nav),
        };

        let html = self.renderer.render_post(&page)?;
        let output_path = self.blog.output_dir.join(self.page_name(&post.slug));
        fs::write(&output_path, html)
            .map_err(|e| anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::info!("Generated blog post: {:?}", output_path);

        Ok(())
    }

    /// Generate sitemap.xml at the site root
    pub fn generate_sitemap(&self, posts: &[Post]) -> Result<()> {
        sitemap::build_sitemap(&self.blog, posts)
    }

    /// Generate rss.xml in the blog directory
    pub fn generate_rss(&self, posts: &[Post]) -> Result<()> {
        rss::build_rss(&self.blog, posts)
    }

    /// Generate robots.txt referencing the sitemap
    pub fn generate_robots(&self) -> Result<()> {
        let content = format!(
            "User-agent: *\nDisallow:\n\nSitemap: {}/sitemap.xml",
            site_root(&self.blog.config)
        );
        let output_path = self.blog.base_dir.join("robots.txt");
        fs::write(&output_path, content)
            .map_err(|e| anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::info!("Generated robots.txt");

        Ok(())
    }

    fn site_context(&self) -> SiteContext {
        let config = &self.blog.config;
        SiteContext {
            title: config.title.clone(),
            author: config.author.clone(),
            tagline: config.tagline.clone(),
            description: config.description.clone(),
            url: site_root(config).to_string(),
            index_url: index_url(config),
            og_image: config.default_og_image.clone(),
            profile_image: config.profile_image.clone(),
        }
    }

    /// Page filename for a slug
    fn page_name(&self, slug: &str) -> String {
        format!("{}.{}", slug, self.blog.config.page_ext)
    }
}

/// Sorted set of all tags across all posts
fn categories(posts: &[Post]) -> Vec<String> {
    posts
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use indexmap::IndexMap;
    use std::path::PathBuf;

    fn make_post(slug: &str, day: u32, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_string(),
            source: PathBuf::from(format!("{}.md", slug)),
            title: slug.to_string(),
            date: chrono::Local.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            description: format!("about {}", slug),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            image: None,
            content: format!("<p>{}</p>", slug),
            raw: String::new(),
            extra: IndexMap::new(),
        }
    }

    #[test]
    fn test_categories_sorted_and_deduped() {
        let posts = vec![
            make_post("a", 1, &["rust", "blog"]),
            make_post("b", 2, &["blog", "notes"]),
        ];
        assert_eq!(categories(&posts), vec!["blog", "notes", "rust"]);
    }

    #[test]
    fn test_generate_writes_pages() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        std::fs::create_dir_all(&blog.output_dir).unwrap();

        let posts = vec![
            make_post("newer", 2, &["blog"]),
            make_post("older", 1, &[]),
        ];

        let generator = Generator::new(&blog).unwrap();
        generator.generate_index(&posts).unwrap();
        generator.generate_posts(&posts).unwrap();

        let index = std::fs::read_to_string(blog.output_dir.join("index.html")).unwrap();
        assert!(index.contains("newer.html"));
        assert!(index.contains("older.html"));

        // Newest post links back to the older one, and nowhere forward
        let newer = std::fs::read_to_string(blog.output_dir.join("newer.html")).unwrap();
        assert!(newer.contains("prev-link"));
        assert!(newer.contains("older.html"));
        assert!(!newer.contains("next-link"));

        let older = std::fs::read_to_string(blog.output_dir.join("older.html")).unwrap();
        assert!(older.contains("next-link"));
        assert!(!older.contains("prev-link"));
    }

    #[test]
    fn test_generate_robots() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();

        let generator = Generator::new(&blog).unwrap();
        generator.generate_robots().unwrap();

        let robots = std::fs::read_to_string(blog.base_dir.join("robots.txt")).unwrap();
        assert!(robots.starts_with("User-agent: *"));
        assert!(robots.contains("Sitemap: https://example.com/sitemap.xml"));
    }

    #[test]
    fn test_recent_excludes_current_post() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = Blog::new(tmp.path()).unwrap();
        std::fs::create_dir_all(&blog.output_dir).unwrap();

        let posts: Vec<Post> = (1..=6)
            .rev()
            .map(|day| make_post(&format!("post-{}", day), day as u32, &[]))
            .collect();

        let generator = Generator::new(&blog).unwrap();
        generator.generate_posts(&posts).unwrap();

        // post-6 is the newest and within the top five, so its own page
        // lists the four other top-five posts
        let page = std::fs::read_to_string(blog.output_dir.join("post-6.html")).unwrap();
        assert!(!page.contains(">post-6</a>"));
        for day in 2..=5 {
            assert!(page.contains(&format!("post-{}.html", day)));
        }
        assert!(!page.contains("recent-post-link\">post-1"));
    }
}
