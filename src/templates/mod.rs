//! Built-in blog theme rendered with Tera
//!
//! Both templates are embedded in the binary. Rendering goes through
//! typed context structs, so a missing value is a render error rather
//! than a leftover marker in the output.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with the theme templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies are already HTML; escaping happens upstream
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("post.html", include_str!("theme/post.html")),
            ("index.html", include_str!("theme/index.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a single post page
    pub fn render_post(&self, page: &PostPage) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &page.site);
        context.insert("post", &page.post);
        context.insert("recent", &page.recent);
        context.insert("categories", &page.categories);
        context.insert("prev_post", &page.prev);
        context.insert("next_post", &page.next);
        Ok(self.tera.render("post.html", &context)?)
    }

    /// Render the blog index page
    pub fn render_index(&self, page: &IndexPage) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", &page.site);
        context.insert("posts", &page.posts);
        context.insert("categories", &page.categories);
        Ok(self.tera.render("index.html", &context)?)
    }
}

/// Site-wide template values
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub title: String,
    pub author: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
    pub index_url: String,
    pub og_image: String,
    pub profile_image: String,
}

/// Values for a single rendered post
#[derive(Debug, Clone, Serialize)]
pub struct PostContext {
    pub title: String,
    pub description: String,
    pub content: String,
    pub slug: String,
    pub url: String,
    pub og_image: String,
    pub date: String,
    pub tags: Vec<String>,
}

/// Previous/next navigation target
#[derive(Debug, Clone, Serialize)]
pub struct NavPost {
    pub title: String,
    pub href: String,
}

/// Sidebar recent-post entry
#[derive(Debug, Clone, Serialize)]
pub struct RecentPost {
    pub title: String,
    pub href: String,
    pub date: String,
}

/// Index page summary card
#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub title: String,
    pub href: String,
    pub date: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Full context for a post page
#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub site: SiteContext,
    pub post: PostContext,
    pub recent: Vec<RecentPost>,
    pub categories: Vec<String>,
    pub prev: Option<NavPost>,
    pub next: Option<NavPost>,
}

/// Full context for the index page
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    pub site: SiteContext,
    pub posts: Vec<PostCard>,
    pub categories: Vec<String>,
}
