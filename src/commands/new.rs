//! Create a new post

use anyhow::Result;
use chrono::Local;
use std::fs;

use crate::Blog;

/// Create a new markdown post under the posts directory
pub fn run(blog: &Blog, title: &str) -> Result<()> {
    fs::create_dir_all(&blog.posts_dir)?;

    let slug = slug::slugify(title);
    let file_path = blog.posts_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        r#"---
title: "{}"
date: "{}"
tags: []
---

"#,
        title,
        Local::now().to_rfc3339()
    );

    fs::write(&file_path, content)?;
    println!("Created: {:?}", file_path);

    Ok(())
}
