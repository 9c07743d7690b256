//! Build the static site

use anyhow::{Context, Result};
use chrono::Local;
use std::fs;

use crate::content::ContentLoader;
use crate::generator::Generator;
use crate::Blog;

/// Run a full build
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    fs::create_dir_all(&blog.output_dir)
        .with_context(|| format!("Failed to create output dir {:?}", blog.output_dir))?;

    let loader = ContentLoader::new(blog);

    tracing::info!("Loading blog posts...");
    let mut posts = loader.load_posts()?;
    tracing::info!("Loaded {} blog posts", posts.len());

    if posts.is_empty() {
        tracing::info!("No blog posts found. Creating a sample post...");
        write_sample_post(blog)?;
        posts = loader.load_posts()?;
    }

    let generator = Generator::new(blog)?;

    tracing::info!("Generating blog index page...");
    generator.generate_index(&posts)?;

    tracing::info!("Generating individual blog posts...");
    generator.generate_posts(&posts)?;

    tracing::info!("Generating sitemap...");
    generator.generate_sitemap(&posts)?;

    tracing::info!("Generating RSS feed...");
    generator.generate_rss(&posts)?;

    tracing::info!("Generating robots.txt...");
    generator.generate_robots()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} posts in {:.2}s",
        posts.len(),
        duration.as_secs_f64()
    );

    Ok(())
}

/// Write the fallback sample post into the posts directory
fn write_sample_post(blog: &Blog) -> Result<()> {
    fs::create_dir_all(&blog.posts_dir)
        .with_context(|| format!("Failed to create posts dir {:?}", blog.posts_dir))?;
    let path = blog.posts_dir.join("welcome.md");
    fs::write(&path, sample_post(&Local::now().to_rfc3339()))
        .with_context(|| format!("Failed to write sample post {:?}", path))?;
    Ok(())
}

fn sample_post(date: &str) -> String {
    format!(
        r#"---
title: "Welcome to My Blog"
date: "{date}"
description: "Welcome to my personal blog where I share my experiences and insights about software engineering."
tags: ["blog", "welcome"]
---

# Welcome to My Blog

Hello and welcome to my personal blog! This is the place where I'll be sharing my thoughts, experiences, and insights about software engineering, backend development, DevOps, and more.

## What to Expect

In this blog, you'll find articles about:

- Software engineering best practices
- Backend development techniques
- DevOps and infrastructure topics
- Cloud technologies and services
- Personal projects and learnings
- Tutorials and guides

Stay tuned for more content coming soon!
"#
    )
}
