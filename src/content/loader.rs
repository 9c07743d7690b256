//! Content loader - discovers and loads posts from the source directory

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::helpers::{excerpt, strip_html};
use crate::Blog;

/// Character budget for derived descriptions
const DESCRIPTION_CHARS: usize = 150;

/// Loads posts from the posts directory
pub struct ContentLoader<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::with_options(
            &blog.config.highlight_theme,
            blog.config.highlight_line_numbers,
        );
        Self { blog, renderer }
    }

    /// Load all posts, sorted by date descending (newest first)
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts_dir = &self.blog.posts_dir;
        if !posts_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(posts_dir).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                posts.push(self.load_post(path)?);
            }
        }

        // Stable sort: equal dates keep discovery order
        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let (fm, body) = FrontMatter::parse(&content);

        let slug = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        let html = self.renderer.render(body)?;

        // Front-matter values win over computed defaults
        let title = fm.title.unwrap_or_else(|| title_from_slug(&slug));

        let date = match fm.date {
            Some(date) => date,
            None => file_modified(path)?,
        };

        let description = fm
            .description
            .unwrap_or_else(|| excerpt(&strip_html(&html), DESCRIPTION_CHARS));

        Ok(Post {
            slug,
            source: path.to_path_buf(),
            title,
            date,
            description,
            tags: fm.tags.unwrap_or_default(),
            image: fm.image,
            content: html,
            raw: body.to_string(),
            extra: fm.extra,
        })
    }
}

/// File modification time as a local timestamp
fn file_modified(path: &Path) -> Result<DateTime<Local>> {
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat {:?}", path))?;
    let modified = metadata.modified()?;
    Ok(DateTime::<Local>::from(modified))
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

/// Default title: slug with hyphens as spaces, title-cased
fn title_from_slug(slug: &str) -> String {
    slug.replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::ymd;

    fn test_blog(dir: &Path) -> Blog {
        Blog::new(dir).unwrap()
    }

    fn write_post(blog: &Blog, name: &str, content: &str) {
        fs::create_dir_all(&blog.posts_dir).unwrap();
        fs::write(blog.posts_dir.join(name), content).unwrap();
    }

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("hello-world"), "Hello World");
        assert_eq!(title_from_slug("RUST-notes"), "Rust Notes");
        assert_eq!(title_from_slug("one"), "One");
    }

    #[test]
    fn test_missing_posts_dir_yields_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert!(posts.is_empty());
    }

    #[test]
    fn test_defaults_derived_from_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        write_post(&blog, "my-first-post.md", "Some plain content without metadata.");

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);

        let post = &posts[0];
        assert_eq!(post.slug, "my-first-post");
        assert_eq!(post.title, "My First Post");
        assert!(post.tags.is_empty());
        assert!(post.description.contains("Some plain content"));

        // Date defaults to the file's modification time
        let mtime = file_modified(&post.source).unwrap();
        assert_eq!(ymd(&post.date), ymd(&mtime));
    }

    #[test]
    fn test_frontmatter_wins_over_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        write_post(
            &blog,
            "custom.md",
            "---\ntitle: \"Chosen Title\"\ndate: \"2021-03-04\"\ndescription: \"Chosen description\"\ntags: [\"a\"]\n---\nbody",
        );

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let post = &posts[0];
        assert_eq!(post.title, "Chosen Title");
        assert_eq!(post.description, "Chosen description");
        assert_eq!(post.tags, vec!["a"]);
        assert_eq!(ymd(&post.date), "2021-03-04");
    }

    #[test]
    fn test_description_truncated_with_ellipsis() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        let body = "word ".repeat(100);
        write_post(&blog, "long.md", &body);

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let description = &posts[0].description;
        assert!(description.ends_with("..."));
        assert_eq!(description.chars().count(), 153);
    }

    #[test]
    fn test_posts_sorted_newest_first() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        write_post(&blog, "old.md", "---\ndate: \"2020-01-01\"\n---\nx");
        write_post(&blog, "new.md", "---\ndate: \"2024-01-01\"\n---\nx");
        write_post(&blog, "mid.md", "---\ndate: \"2022-01-01\"\n---\nx");

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_recursive_discovery() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        write_post(&blog, "top.md", "top level");
        fs::create_dir_all(blog.posts_dir.join("2024")).unwrap();
        fs::write(blog.posts_dir.join("2024/nested.md"), "nested").unwrap();
        fs::write(blog.posts_dir.join("notes.txt"), "ignored").unwrap();

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let mut slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        slugs.sort();
        assert_eq!(slugs, vec!["nested", "top"]);
    }

    #[test]
    fn test_rendered_body_and_raw_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        write_post(&blog, "p.md", "---\ntitle: T\n---\n# Heading\n\nParagraph.");

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        let post = &posts[0];
        assert!(post.content.contains("Heading</h1>"));
        assert!(post.raw.starts_with("# Heading"));
        assert!(!post.raw.contains("---"));
    }
}
