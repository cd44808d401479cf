//! Post listings driven by the site configuration.
//!
//! - [`PostMeta`]: frontmatter of one post
//! - [`PostFilter`]: draft and scheduled-post visibility
//! - [`paginate`]: split visible posts into listing pages

mod filter;
mod meta;
mod paginate;

pub use filter::{PostFilter, sort_posts};
pub use meta::PostMeta;
pub use paginate::{Page, page_url, paginate};

use crate::config::Registry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Read a JSON array of post metadata.
pub fn load_manifest(path: &Path) -> Result<Vec<PostMeta>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read posts manifest '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("invalid posts manifest '{}'", path.display()))
}

/// Visible posts, newest first, split by the registry's page size.
pub fn listing<'a>(
    registry: &Registry,
    filter: &PostFilter,
    posts: &'a [PostMeta],
) -> Vec<Page<&'a PostMeta>> {
    paginate(filter.apply(posts), registry.site().posts_per_page)
}
