//! List visible posts for one listing page.

use super::PostsArgs;
use crate::config::Registry;
use crate::log;
use crate::post::{self, Page, PostFilter, PostMeta};
use crate::utils::{DateTimeUtc, plural_count};
use anyhow::{Result, bail};
use owo_colors::OwoColorize;

pub fn list_posts(registry: &Registry, args: &PostsArgs) -> Result<()> {
    let posts = post::load_manifest(&args.manifest)?;
    let filter = PostFilter::new(registry, args.now.unwrap_or_else(DateTimeUtc::now))
        .with_drafts(args.drafts)
        .with_preview(args.preview);

    let pages = post::listing(registry, &filter, &posts);
    crate::debug!("posts"; "{} of {} visible", pages.iter().map(|p| p.items.len()).sum::<usize>(), plural_count(posts.len(), "post"));

    if pages.is_empty() {
        log!("posts"; "no visible posts");
        return Ok(());
    }

    let Some(page) = args.page.checked_sub(1).and_then(|i| pages.get(i)) else {
        bail!(
            "page {} does not exist, listing has {}",
            args.page,
            plural_count(pages.len(), "page")
        );
    };

    for line in render_page(registry, page) {
        println!("{line}");
    }
    Ok(())
}

fn render_page(registry: &Registry, page: &Page<&PostMeta>) -> Vec<String> {
    let base = registry.site().base_path();
    let locale = registry.locale();

    let mut lines = vec![format!(
        "{} ({} of {})",
        page.url(&base).bold(),
        page.number,
        page.total
    )];

    for post in &page.items {
        let mut flags = String::new();
        if post.featured {
            flags.push_str(" [featured]");
        }
        if post.draft {
            flags.push_str(" [draft]");
        }
        lines.push(format!(
            "  {}  {}{}  {}",
            locale.format_datetime(post.updated()),
            post.title,
            flags,
            post.permalink().dimmed()
        ));
    }

    if let Some(prev) = page.prev_url(&base) {
        lines.push(format!("  prev: {prev}"));
    }
    if let Some(next) = page.next_url(&base) {
        lines.push(format!("  next: {next}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(manifest: PathBuf, page: usize) -> PostsArgs {
        PostsArgs {
            manifest,
            page,
            drafts: false,
            preview: false,
            now: Some(DateTimeUtc::from_ymd(2024, 6, 1)),
        }
    }

    #[test]
    fn test_render_page_lists_titles() {
        let registry = Registry::example().unwrap();
        let mut featured = PostMeta::new("Featured", DateTimeUtc::new(2024, 6, 15, 14, 30, 0));
        featured.featured = true;
        featured.slug = "featured".into();
        let posts = [featured];
        let filter = PostFilter::new(&registry, DateTimeUtc::from_ymd(2024, 7, 1));

        let pages = post::listing(&registry, &filter, &posts);
        let lines = render_page(&registry, &pages[0]);

        assert!(lines[0].contains("/posts/"));
        assert!(lines[1].contains("Jun 15, 2024 | 02:30 PM"));
        assert!(lines[1].contains("Featured [featured]"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_missing_page_fails() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("posts.json");
        fs::write(
            &manifest,
            r#"[{"title": "A", "pubDatetime": "2024-01-01"}]"#,
        )
        .unwrap();
        let registry = Registry::example().unwrap();

        assert!(list_posts(&registry, &args(manifest.clone(), 1)).is_ok());
        assert!(list_posts(&registry, &args(manifest.clone(), 2)).is_err());
        assert!(list_posts(&registry, &args(manifest, 0)).is_err());
    }

    #[test]
    fn test_empty_listing_is_ok() {
        let temp = TempDir::new().unwrap();
        let manifest = temp.path().join("posts.json");
        fs::write(&manifest, "[]").unwrap();
        let registry = Registry::example().unwrap();

        assert!(list_posts(&registry, &args(manifest, 3)).is_ok());
    }
}
