//! Post model

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use std::path::PathBuf;

use super::frontmatter::FieldValue;

/// A blog post
#[derive(Debug, Clone)]
pub struct Post {
    /// URL-forming identifier, derived from the source filename stem
    pub slug: String,

    /// Source file path
    pub source: PathBuf,

    /// Post title
    pub title: String,

    /// Publication date
    pub date: DateTime<Local>,

    /// Short summary used for meta tags, index cards, and feeds
    pub description: String,

    /// Post tags
    pub tags: Vec<String>,

    /// Open Graph image override
    pub image: Option<String>,

    /// Rendered HTML content
    pub content: String,

    /// Raw markdown content (front-matter removed)
    pub raw: String,

    /// Unrecognized front-matter fields, retained but unused
    pub extra: IndexMap<String, FieldValue>,
}

impl Post {
    fn position(&self, posts: &[Post]) -> Option<usize> {
        posts.iter().position(|p| p.slug == self.slug)
    }

    /// The chronologically older neighbor in a newest-first collection
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = self.position(posts)?;
        posts.get(pos + 1)
    }

    /// The chronologically newer neighbor in a newest-first collection
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = self.position(posts)?;
        if pos > 0 {
            posts.get(pos - 1)
        } else {
            None
        }
    }
}
