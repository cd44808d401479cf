//! `[site]` configuration: site identity, pagination and scheduling.
//!
//! # Example
//!
//! ```toml
//! [site]
//! website = "https://example.com/"
//! author = "Alice"
//! description = "A personal blog"
//! title = "Alice's Blog"
//! og_image = "og.jpg"
//! light_and_dark_mode = true
//! posts_per_page = 3
//! scheduled_post_margin_ms = 900000
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Default number of posts per listing page.
pub const DEFAULT_POSTS_PER_PAGE: NonZeroUsize = NonZeroUsize::new(3).unwrap();

/// Default scheduled post margin: 15 minutes.
pub const DEFAULT_SCHEDULED_POST_MARGIN_MS: u64 = 15 * 60 * 1000;

/// Site metadata used for page titles, meta tags and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Deployed site URL (e.g., "https://example.com/").
    pub website: String,

    /// Author name.
    pub author: String,

    /// Site description for meta tags.
    #[serde(alias = "desc")]
    pub description: String,

    /// Site title.
    pub title: String,

    /// Default Open Graph image, relative to the site root.
    pub og_image: String,

    /// Offer a light/dark theme toggle.
    pub light_and_dark_mode: bool,

    /// Posts per listing page, at least 1.
    pub posts_per_page: NonZeroUsize,

    /// Posts dated less than this many milliseconds ago stay hidden.
    pub scheduled_post_margin_ms: u64,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            website: String::new(),
            author: String::new(),
            description: String::new(),
            title: String::new(),
            og_image: "og.jpg".into(),
            light_and_dark_mode: true,
            posts_per_page: DEFAULT_POSTS_PER_PAGE,
            scheduled_post_margin_ms: DEFAULT_SCHEDULED_POST_MARGIN_MS,
        }
    }
}

impl SiteInfoConfig {
    /// Absolute URL of an OG image.
    ///
    /// `image` is a post-specific override; the site default is used when
    /// it is `None`. Absolute URLs pass through unchanged.
    pub fn og_image_url(&self, image: Option<&str>) -> Option<url::Url> {
        self.url_for(image.unwrap_or(&self.og_image))
    }

    /// Deployment path prefix without slashes, e.g. `"blog"` for
    /// `https://alice.github.io/blog/`. Empty for root deployments.
    pub fn base_path(&self) -> String {
        crate::config::util::extract_url_path(&self.website).unwrap_or_default()
    }

    /// Absolute URL for a site path such as `/posts/hello/`.
    ///
    /// Paths resolve under the deployment prefix whether or not `website`
    /// ends with a slash.
    pub fn url_for(&self, path: &str) -> Option<url::Url> {
        self.base_url()?.join(path.trim_start_matches('/')).ok()
    }

    /// `website` with its path forced to end in `/`.
    fn base_url(&self) -> Option<url::Url> {
        let mut base = url::Url::parse(&self.website).ok()?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Some(base)
    }

    /// Browser title for a page: `"<page> | <site>"`, or just the site title.
    pub fn page_title(&self, page: Option<&str>) -> String {
        match page.map(str::trim).filter(|p| !p.is_empty()) {
            Some(page) => format!("{page} | {}", self.title),
            None => self.title.clone(),
        }
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` is not blank
    /// - `website` is a valid http(s) URL with a host
    /// - `og_image` resolves against `website`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title is required",
                format!("set {}, e.g.: \"My Blog\"", Self::FIELDS.title),
            );
        }

        if self.website.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.website,
                "website is required",
                format!("set {}, e.g.: \"https://example.com/\"", Self::FIELDS.website),
            );
            return;
        }

        match url::Url::parse(&self.website) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com/",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.website,
                        "URL must have a valid host",
                        "use format like https://example.com/",
                    );
                }
                if !self.og_image.is_empty() && self.url_for(&self.og_image).is_none() {
                    diag.error(
                        Self::FIELDS.og_image,
                        format!("'{}' cannot be resolved against the website", self.og_image),
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.website,
                    format!("invalid URL: {e}"),
                    "use format like https://example.com/",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(website: &str) -> SiteInfoConfig {
        SiteInfoConfig {
            website: website.into(),
            title: "Blog".into(),
            ..SiteInfoConfig::default()
        }
    }

    #[test]
    fn test_defaults() {
        let site = SiteInfoConfig::default();
        assert_eq!(site.posts_per_page.get(), 3);
        assert_eq!(site.scheduled_post_margin_ms, 900_000);
        assert!(site.light_and_dark_mode);
    }

    #[test]
    fn test_zero_posts_per_page_rejected_at_parse() {
        let result: Result<SiteInfoConfig, _> = toml::from_str("posts_per_page = 0");
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_margin_rejected_at_parse() {
        let result: Result<SiteInfoConfig, _> = toml::from_str("scheduled_post_margin_ms = -1");
        assert!(result.is_err());
    }

    #[test]
    fn test_desc_alias() {
        let site: SiteInfoConfig = toml::from_str("desc = \"A blog\"").unwrap();
        assert_eq!(site.description, "A blog");
    }

    #[test]
    fn test_validate_ok() {
        let mut diag = ConfigDiagnostics::new();
        site("https://example.com/").validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_validate_missing_title_and_website() {
        let mut diag = ConfigDiagnostics::new();
        SiteInfoConfig::default().validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["site.title", "site.website"]);
    }

    #[test]
    fn test_validate_bad_website() {
        for bad in ["example.com", "ftp://example.com", "not a url"] {
            let mut diag = ConfigDiagnostics::new();
            site(bad).validate(&mut diag);
            assert!(diag.has_errors(), "{bad} should be rejected");
            assert_eq!(diag.errors()[0].field.as_str(), "site.website");
        }
    }

    #[test]
    fn test_og_image_url() {
        let site = site("https://example.com/blog/");
        assert_eq!(
            site.og_image_url(None).unwrap().as_str(),
            "https://example.com/blog/og.jpg"
        );
        assert_eq!(
            site.og_image_url(Some("/posts/hello.png")).unwrap().as_str(),
            "https://example.com/blog/posts/hello.png"
        );
        assert_eq!(
            site.og_image_url(Some("https://cdn.example.com/x.png"))
                .unwrap()
                .as_str(),
            "https://cdn.example.com/x.png"
        );
    }

    #[test]
    fn test_urls_keep_prefix_without_trailing_slash() {
        for website in ["https://alice.github.io/blog", "https://alice.github.io/blog/"] {
            let site = site(website);
            assert_eq!(site.base_path(), "blog");
            assert_eq!(
                site.og_image_url(None).unwrap().as_str(),
                "https://alice.github.io/blog/og.jpg",
                "{website}"
            );
            assert_eq!(
                site.url_for("/posts/x/").unwrap().as_str(),
                "https://alice.github.io/blog/posts/x/",
                "{website}"
            );
        }
    }

    #[test]
    fn test_url_for_root_deployment() {
        for website in ["https://example.com", "https://example.com/"] {
            assert_eq!(
                site(website).url_for("/posts/x/").unwrap().as_str(),
                "https://example.com/posts/x/"
            );
        }
    }

    #[test]
    fn test_base_path() {
        assert_eq!(site("https://example.com/").base_path(), "");
        assert_eq!(site("https://alice.github.io/blog/").base_path(), "blog");
        assert_eq!(site("garbage").base_path(), "");
    }

    #[test]
    fn test_page_title() {
        let site = site("https://example.com/");
        assert_eq!(site.page_title(Some("Posts")), "Posts | Blog");
        assert_eq!(site.page_title(Some("  ")), "Blog");
        assert_eq!(site.page_title(None), "Blog");
    }
}
