//! Clean generated artifacts

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Remove generated pages and feeds, keeping post sources
pub fn run(blog: &Blog) -> Result<()> {
    if blog.output_dir.exists() {
        let page_suffix = format!(".{}", blog.config.page_ext);

        for entry in fs::read_dir(&blog.output_dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.ends_with(&page_suffix) || name == "rss.xml" {
                fs::remove_file(&path)?;
                tracing::debug!("Deleted: {:?}", path);
            }
        }
    }

    for name in ["sitemap.xml", "robots.txt"] {
        let path = blog.base_dir.join(name);
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!("Deleted: {:?}", path);
        }
    }

    tracing::info!("Cleaned generated files");
    Ok(())
}
